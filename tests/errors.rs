// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, weaver_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_error_invalid_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    weaver_cmd()
        .args(["-d", "non_existent_path_hopefully"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non_existent_path_hopefully"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_directory_is_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.py", "x\n")?;

    weaver_cmd()
        .args(["-d", "main.py"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_bad_chunk_size() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    weaver_cmd()
        .args(["-c", "lots"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid chunk size"));

    weaver_cmd()
        .args(["-c", "0"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Chunk size must be greater than 0"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_bad_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    weaver_cmd()
        .args(["--endpoint", "ftp://example.com/upload"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Endpoint must use http or https"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_no_files_found_exits_with_status_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "notes.md", "# notes\n")?;

    weaver_cmd()
        .args(["-o", "t.txt"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "No files found matching the specified criteria.",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn test_unreachable_endpoint_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.py", "a\n")?;

    weaver_cmd()
        .args(["--endpoint", "http://127.0.0.1:9/api/text"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to send chunk 1 of 1"));

    temp.close()?;
    Ok(())
}
