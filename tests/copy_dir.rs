use assert_fs::prelude::*;
use folder_ops::{CopyOptions, FolderError, copy, exists};
use std::fs;

#[test]
fn recursive_copy_reproduces_the_tree() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let src = temp.child("project");
    src.create_dir_all().expect("mkdir src");
    src.child("a.txt").write_str("alpha").expect("write a");
    src.child("sub").create_dir_all().expect("mkdir sub");
    src.child("sub/b.log").write_str("beta").expect("write b");
    src.child("sub/empty").create_dir_all().expect("mkdir empty");

    let dest = temp.path().join("backup");
    assert!(copy(src.path(), &dest, CopyOptions::default()).expect("copy"));

    assert_eq!(fs::read_to_string(dest.join("a.txt")).expect("read a"), "alpha");
    assert_eq!(
        fs::read_to_string(dest.join("sub/b.log")).expect("read b"),
        "beta"
    );
    assert!(dest.join("sub/empty").is_dir());
    // Source untouched.
    src.child("a.txt").assert("alpha");
}

#[test]
fn bare_destination_resolves_as_sibling() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let src = temp.child("docs");
    src.create_dir_all().expect("mkdir src");
    src.child("readme.md").write_str("hi").expect("write");

    assert!(copy(src.path(), "documents", CopyOptions::default()).expect("copy"));

    let sibling = temp.path().join("documents");
    assert!(exists(&sibling));
    assert_eq!(
        fs::read_to_string(sibling.join("readme.md")).expect("read"),
        "hi"
    );
}

#[test]
fn non_recursive_copy_skips_subdirectories() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let src = temp.child("mixed");
    src.create_dir_all().expect("mkdir src");
    src.child("top.txt").write_str("top").expect("write top");
    src.child("sub").create_dir_all().expect("mkdir sub");
    src.child("sub/nested.txt").write_str("nested").expect("write nested");

    let dest = temp.path().join("flat");
    assert!(copy(src.path(), &dest, CopyOptions::default().recursive(false)).expect("copy"));

    assert!(dest.join("top.txt").is_file());
    assert!(!dest.join("sub").exists(), "subdirectory must not be created");
}

#[test]
fn copy_into_existing_destination_merges() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let src = temp.child("incoming");
    src.create_dir_all().expect("mkdir src");
    src.child("new.txt").write_str("new").expect("write");

    let dest = temp.child("existing");
    dest.create_dir_all().expect("mkdir dest");
    dest.child("old.txt").write_str("old").expect("write old");

    assert!(copy(src.path(), dest.path(), CopyOptions::default()).expect("copy"));
    assert!(dest.path().join("new.txt").is_file());
    assert!(dest.path().join("old.txt").is_file());
}

#[test]
fn missing_source_is_an_error() {
    let temp = assert_fs::TempDir::new().expect("tempdir");
    let missing = temp.path().join("absent");
    let err = copy(&missing, temp.path().join("out"), CopyOptions::default()).unwrap_err();
    match err {
        FolderError::NotFound(path) => assert_eq!(path, missing),
    }
}
