use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--action", "init"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .comtransrc.json"));

    let content = test.read_file(".comtransrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["reviewFile"], "review.csv");
    assert_eq!(parsed["extensions"], serde_json::json!(["cpp", "h"]));
    assert!(parsed.get("translator").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".comtransrc.json", "{}")?;

    let output = test.command().args(["--action", "init"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(".comtransrc.json already exists"));
    assert_eq!(test.read_file(".comtransrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().args(["--action", "init"]).output()?;
    test.write_file("src/a.h", "int x; // привет\n")?;

    let output = test.scan_command("ru").output()?;

    assert!(
        output.status.success(),
        "scan should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}
