//! End-to-end tests for the `docs-validator` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docs-validator"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn book_with(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("src/content/docs");
    fs::create_dir_all(&root).unwrap();
    for (name, content) in files {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    tmp
}

#[test]
fn test_cli_passes_on_valid_book() {
    let tmp = book_with(&[(
        "index.mdx",
        "---\ntitle: Home\ndescription: Start here\n---\n```ts\nconst a = 1;\n```\n",
    )]);

    let output = run_in(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Docs validation passed: 1 files, 1 code blocks.\n"
    );
}

#[test]
fn test_cli_passes_on_empty_book() {
    let tmp = book_with(&[]);

    let output = run_in(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Docs validation passed: 0 files, 0 code blocks.\n"
    );
}

#[test]
fn test_cli_fails_on_validation_error() {
    let tmp = book_with(&[("index.mdx", "no frontmatter here\n")]);

    let output = run_in(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Docs validation failed:"), "{stderr}");
    assert!(stderr.contains("index.mdx: missing frontmatter"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_crashes_without_content_root() {
    let tmp = TempDir::new().unwrap();

    let output = run_in(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Docs validation crashed:"), "{stderr}");
    assert!(!stderr.contains("Docs validation failed:"), "{stderr}");
}

#[test]
fn test_cli_json_format() {
    let tmp = book_with(&[("a.mdx", "---\ntitle: A\ndescription: B\n---\nFIXME\n")]);

    let output = run_in(tmp.path(), &["--format", "json"]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files_scanned"], 1);
    assert_eq!(json["errors"][0]["pattern"], "/FIXME/i");
}
