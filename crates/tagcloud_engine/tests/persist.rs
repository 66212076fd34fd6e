use std::fs;

use tagcloud_engine::write_atomic;
use tempfile::TempDir;

#[test]
fn writes_and_replaces_the_target() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("cloud.html");

    write_atomic(&target, "first").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "first");

    // Replace existing
    write_atomic(&target, "second").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "second");
}

#[test]
fn creates_a_missing_parent_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("out").join("cloud.html");

    write_atomic(&target, "data").unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "data");
}

#[test]
fn no_partial_file_when_the_destination_is_unusable() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let target = blocker.join("cloud.html");
    let result = write_atomic(&target, "data");

    assert!(result.is_err());
    assert!(!target.exists());
    // The blocking file is untouched.
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
}

#[test]
fn leaves_no_stray_temp_files_on_success() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("cloud.html");

    write_atomic(&target, "data").unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name())
        .collect();
    assert_eq!(entries, vec!["cloud.html"]);
}
