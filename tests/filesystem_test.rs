//! Tests for the real FileSystem implementation

use std::fs;

use tempfile::TempDir;

use navtree::infrastructure::traits::{FileSystem, RealFileSystem};

#[test]
fn given_nested_path_when_ensure_parent_then_creates_directories() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("a/b/c/out.html");
    let fs = RealFileSystem;

    // Act
    fs.ensure_parent(&target).unwrap();

    // Assert
    assert!(temp.path().join("a/b/c").is_dir());
    assert!(!target.exists());
}

#[test]
fn given_bare_file_name_when_ensure_parent_then_noop() {
    let fs = RealFileSystem;
    fs.ensure_parent(std::path::Path::new("out.html")).unwrap();
}

#[test]
fn given_written_file_when_reading_then_roundtrips_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nav.json");
    let fs = RealFileSystem;

    fs.write(&path, "[]").unwrap();

    assert!(fs.exists(&path));
    assert!(fs.is_file(&path));
    assert_eq!(fs.read_to_string(&path).unwrap(), "[]");
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn given_directory_when_is_file_then_false() {
    let temp = TempDir::new().unwrap();
    let fs = RealFileSystem;

    assert!(fs.exists(temp.path()));
    assert!(!fs.is_file(temp.path()));
}
