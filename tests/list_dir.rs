use std::fs;

use filetime::{FileTime, set_file_mtime};
use folder_ops::{EntryKind, FolderError, ListOptions, list};
use tempfile::tempdir;

#[test]
fn single_file_entry_carries_full_metadata() {
    let td = tempdir().expect("tempdir");
    let file = td.path().join("foo.txt");
    fs::write(&file, b"hello").expect("write foo.txt");
    set_file_mtime(&file, FileTime::from_unix_time(1_700_000_000, 0)).expect("set mtime");

    let entries = list(td.path(), ListOptions::default()).expect("list");
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.name(), Some("foo.txt"));
    assert_eq!(entry.kind(), Some(EntryKind::File));
    assert_eq!(entry.extension(), Some("txt"));
    assert_eq!(entry.size(), Some(5));
    assert_eq!(entry.timestamp(), Some(1_700_000_000));
    assert_eq!(
        entry.path(),
        Some(file.to_string_lossy().as_ref()),
        "path is directory joined with name"
    );
    assert_eq!(entry.directory(), Some(td.path().to_string_lossy().as_ref()));
}

#[test]
fn directories_appear_only_when_requested() {
    let td = tempdir().expect("tempdir");
    fs::create_dir(td.path().join("sub")).expect("mkdir sub");
    fs::write(td.path().join("a.txt"), b"a").expect("write a.txt");

    let files_only = list(td.path(), ListOptions::default()).expect("list files");
    assert_eq!(files_only.len(), 1);
    assert_eq!(files_only[0].name(), Some("a.txt"));

    let with_dirs = list(td.path(), ListOptions::default().directories(true)).expect("list all");
    assert_eq!(with_dirs.len(), 2);
    let sub = with_dirs
        .iter()
        .find(|e| e.name() == Some("sub"))
        .expect("sub listed");
    assert_eq!(sub.kind(), Some(EntryKind::Directory));
    assert_eq!(sub.extension(), Some(""));
}

#[test]
fn recursive_list_surfaces_nested_files() {
    let td = tempdir().expect("tempdir");
    let deep = td.path().join("one/two/three");
    fs::create_dir_all(&deep).expect("mkdir tree");
    fs::write(deep.join("leaf.log"), b"leaf").expect("write leaf");
    fs::write(td.path().join("top.txt"), b"top").expect("write top");

    let flat = list(td.path(), ListOptions::default()).expect("flat list");
    assert_eq!(flat.len(), 1, "non-recursive must not descend");

    let entries = list(td.path(), ListOptions::default().recursive(true)).expect("recursive list");
    let names: Vec<_> = entries.iter().filter_map(|e| e.name()).collect();
    assert!(names.contains(&"leaf.log"));
    assert!(names.contains(&"top.txt"));
    assert_eq!(entries.len(), 2, "directories stay excluded by default");
}

#[test]
fn subtree_entries_come_before_their_directory() {
    let td = tempdir().expect("tempdir");
    let sub = td.path().join("sub");
    fs::create_dir(&sub).expect("mkdir sub");
    fs::write(sub.join("inner.txt"), b"x").expect("write inner");

    let entries = list(
        td.path(),
        ListOptions::default().recursive(true).directories(true),
    )
    .expect("list");

    let names: Vec<_> = entries.iter().filter_map(|e| e.name()).collect();
    let inner = names.iter().position(|n| *n == "inner.txt").expect("inner listed");
    let dir = names.iter().position(|n| *n == "sub").expect("sub listed");
    assert!(inner < dir, "child entries precede the directory itself");
}

#[test]
fn missing_root_is_an_error() {
    let td = tempdir().expect("tempdir");
    let missing = td.path().join("nope");
    let err = list(&missing, ListOptions::default()).unwrap_err();
    match err {
        FolderError::NotFound(path) => assert_eq!(path, missing),
    }
}
