use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_scan_writes_review_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.h", "#pragma once\n\nint x; // привет\n")?;
    test.write_file(
        "src/net/socket.cpp",
        "// Сокет, \"неблокирующий\"\nint fd; // file descriptor\n",
    )?;
    test.write_file("src/notes.txt", "// не исходник\n")?;

    let output = test.scan_command("ru").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Scanned 2 files, found 2 comments"));
    assert_eq!(
        test.read_file("src/review.csv")?,
        "path,line,text,translation\n\
         a.h,3,привет,\n\
         net/socket.cpp,1,\"Сокет, \"\"неблокирующий\"\"\",\n"
    );
    Ok(())
}

#[test]
fn test_scan_twice_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.h", "int x; // привет\n")?;

    test.scan_command("ru").output()?;
    let first = test.read_file("src/review.csv")?;

    let output = test.scan_command("ru").output()?;
    assert!(stdout(&output).contains("Skipped 1 already in the review file"));
    assert_eq!(test.read_file("src/review.csv")?, first);
    Ok(())
}

#[test]
fn test_scan_missing_source_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command("ru").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("path not found"));
    Ok(())
}

#[test]
fn test_scan_unsupported_language() -> Result<()> {
    let test = CliTest::with_file("src/a.h", "int x; // привет\n")?;

    let output = test.scan_command("xx").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unsupported source language 'xx'"));
    assert!(!test.root().join("src/review.csv").exists());
    Ok(())
}

#[test]
fn test_scan_requires_from() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--action", "scan"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--from"));
    Ok(())
}

#[test]
fn test_scan_reports_unreadable_file_and_continues() -> Result<()> {
    let test = CliTest::with_file("src/good.cpp", "int x; // привет\n")?;
    std::fs::write(
        test.root().join("src/legacy.h"),
        b"int y; // \xef\xf0\xe8\xe2\xe5\xf2\n",
    )?;

    let output = test.scan_command("ru").output()?;

    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("unreadable-file"), "stderr: {}", err);
    assert!(err.contains("--> legacy.h"), "stderr: {}", err);
    assert_eq!(
        test.read_file("src/review.csv")?,
        "path,line,text,translation\ngood.cpp,1,привет,\n"
    );
    Ok(())
}

#[test]
fn test_scan_respects_config_extensions_and_ignores() -> Result<()> {
    let test = CliTest::with_file(
        ".comtransrc.json",
        r#"{ "extensions": ["hpp"], "ignores": ["vendor"], "reviewFile": "comments.csv" }"#,
    )?;
    test.write_file("src/a.hpp", "int x; // привет\n")?;
    test.write_file("src/b.h", "int y; // мир\n")?;
    test.write_file("src/vendor/c.hpp", "int z; // чужое\n")?;

    let output = test.scan_command("ru").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("src/comments.csv")?,
        "path,line,text,translation\na.hpp,1,привет,\n"
    );
    Ok(())
}
