use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, HELLO_TRANSLATOR, stderr, stdout};

#[test]
fn test_scan_then_write_end_to_end() -> Result<()> {
    let test = CliTest::with_file(".comtransrc.json", HELLO_TRANSLATOR)?;
    test.write_file("src/a.h", "#pragma once\n\nint x; // привет\nint y; // keep\n")?;

    let scan = test.scan_command("ru").output()?;
    assert_eq!(scan.status.code(), Some(0), "stderr: {}", stderr(&scan));
    assert_eq!(
        test.read_file("src/review.csv")?,
        "path,line,text,translation\na.h,3,привет,\n"
    );

    let write = test.write_command("ru", "en").output()?;
    assert_eq!(write.status.code(), Some(0), "stderr: {}", stderr(&write));
    assert!(stdout(&write).contains("Translated 1 of 1 entry in 1 file"));

    assert_eq!(
        test.read_file("out/a.h")?,
        "#pragma once\n\nint x; // hello\nint y; // keep\n"
    );
    assert_eq!(
        test.read_file("src/a.h")?,
        "#pragma once\n\nint x; // привет\nint y; // keep\n"
    );
    assert!(!test.root().join("out/review.csv").exists());
    Ok(())
}

#[test]
fn test_write_refuses_existing_destination() -> Result<()> {
    let test = CliTest::with_file(".comtransrc.json", HELLO_TRANSLATOR)?;
    test.write_file("src/a.h", "int x; // привет\n")?;
    test.write_file("src/review.csv", "a.h,1,привет,\n")?;
    test.write_file("out/existing.h", "untouched\n")?;

    let output = test.write_command("ru", "en").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("destination already exists"));
    assert_eq!(test.read_file("out/existing.h")?, "untouched\n");
    assert!(!test.root().join("out/a.h").exists());
    Ok(())
}

#[test]
fn test_write_malformed_review_file() -> Result<()> {
    let test = CliTest::with_file(".comtransrc.json", HELLO_TRANSLATOR)?;
    test.write_file("src/a.h", "int x; // привет\n")?;
    test.write_file("src/review.csv", "path,line,text,translation\na.h,third,привет,\n")?;

    let output = test.write_command("ru", "en").output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("malformed review file"), "stderr: {}", err);
    assert!(err.contains("row 2"), "stderr: {}", err);
    assert!(!test.root().join("out").exists());
    Ok(())
}

#[test]
fn test_write_reports_drift_and_continues() -> Result<()> {
    let test = CliTest::with_file(".comtransrc.json", HELLO_TRANSLATOR)?;
    test.write_file("src/a.h", "int x; // привет\n")?;
    test.write_file("src/b.h", "// новый заголовок\nint y;\n")?;
    test.write_file(
        "src/review.csv",
        "path,line,text,translation\na.h,1,привет,\nb.h,2,старый,\n",
    )?;

    let output = test.write_command("ru", "en").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains("line no longer contains a comment"), "stderr: {}", err);
    assert!(err.contains("--> b.h:2"), "stderr: {}", err);
    assert!(stdout(&output).contains("1 warning"));
    assert_eq!(test.read_file("out/a.h")?, "int x; // hello\n");
    assert_eq!(test.read_file("out/b.h")?, "// новый заголовок\nint y;\n");
    Ok(())
}

#[test]
fn test_write_translation_failure_is_reported() -> Result<()> {
    let test = CliTest::with_file(
        ".comtransrc.json",
        r#"{
            "retries": 0,
            "translator": { "program": "/bin/sh", "args": ["-c", "echo rate limited >&2; exit 1"] }
        }"#,
    )?;
    test.write_file("src/a.h", "int x; // привет\nint y; // мир\n")?;
    test.write_file(
        "src/review.csv",
        "path,line,text,translation\na.h,1,привет,\na.h,2,мир,world\n",
    )?;

    let output = test.write_command("ru", "en").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains("translation-failure"), "stderr: {}", err);
    assert!(err.contains("rate limited"), "stderr: {}", err);
    assert_eq!(test.read_file("out/a.h")?, "int x; // привет\nint y; // world\n");
    Ok(())
}

#[test]
fn test_write_without_translator_needs_manual_translations() -> Result<()> {
    let test = CliTest::with_file("src/a.h", "int x; // привет\n")?;
    test.write_file("src/review.csv", "a.h,1,привет,\n")?;

    let output = test.write_command("ru", "en").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no translator configured"));
    assert!(!test.root().join("out").exists());
    Ok(())
}

#[test]
fn test_write_requires_dest() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["--action", "write", "--from", "ru", "--to", "en"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--dest"));
    Ok(())
}
