//! The `Entry` value object returned by directory listings.
//!
//! An entry is an open attribute bag over [`serde_json::Value`] with a set of
//! well-known fields (`name`, `directory`, `path`, `size`, `timestamp`,
//! `type`, `extension`) exposed through typed accessors. Reading an unknown
//! key yields `Value::Null` as a contract, not an error. Entries are built
//! once per child during a listing and never mutated by this crate
//! afterwards.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Wire form stored in the entry's `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "file" => Some(EntryKind::File),
            "directory" => Some(EntryKind::Directory),
            _ => None,
        }
    }
}

/// One file or directory entry, as seen at listing time.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    fields: Map<String, Value>,
}

impl Entry {
    /// Build an entry from named fields.
    ///
    /// Two fields are derived when absent:
    /// - `path` from `directory` joined with `name`;
    /// - `extension` from `name` when `type` is `"file"`, empty otherwise.
    pub fn new(mut fields: Map<String, Value>) -> Self {
        if !fields.contains_key("path") {
            let derived = match (
                fields.get("directory").and_then(Value::as_str),
                fields.get("name").and_then(Value::as_str),
            ) {
                (Some(dir), Some(name)) => {
                    Some(Path::new(dir).join(name).to_string_lossy().into_owned())
                }
                _ => None,
            };
            if let Some(path) = derived {
                fields.insert("path".into(), Value::String(path));
            }
        }

        if !fields.contains_key("extension") {
            let is_file = fields.get("type").and_then(Value::as_str) == Some("file");
            let ext = if is_file {
                fields
                    .get("name")
                    .and_then(Value::as_str)
                    .and_then(|name| Path::new(name).extension())
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default()
            } else {
                String::new()
            };
            fields.insert("extension".into(), Value::String(ext));
        }

        Self { fields }
    }

    /// Build the canonical listing shape from a stat'ed child.
    ///
    /// Paths outside the platform encoding are carried lossily; the entry is
    /// a reporting surface, not a handle back into the filesystem.
    pub fn from_parts(
        name: &OsStr,
        directory: &Path,
        size: u64,
        timestamp: i64,
        kind: EntryKind,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert("name".into(), name.to_string_lossy().into_owned().into());
        fields.insert(
            "directory".into(),
            directory.to_string_lossy().into_owned().into(),
        );
        fields.insert("timestamp".into(), timestamp.into());
        fields.insert("size".into(), size.into());
        fields.insert("type".into(), kind.as_str().into());
        Self::new(fields)
    }

    /// Field value by key, `Value::Null` when absent.
    pub fn get(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL)
    }

    /// Insert or overwrite a field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Presence check for a field.
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Remove a field; absent keys are a no-op.
    pub fn unset(&mut self, key: &str) {
        self.fields.remove(key);
    }

    /// Insert `value` at the next integer index (`"0"`, `"1"`, …), supporting
    /// list-like usage of the bag.
    pub fn append(&mut self, value: impl Into<Value>) {
        let next = self
            .fields
            .keys()
            .filter_map(|k| k.parse::<u64>().ok())
            .max()
            .map_or(0, |m| m + 1);
        self.fields.insert(next.to_string(), value.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").as_str()
    }

    pub fn directory(&self) -> Option<&str> {
        self.get("directory").as_str()
    }

    /// Full path of the entry.
    pub fn path(&self) -> Option<&str> {
        self.get("path").as_str()
    }

    /// Size in bytes.
    pub fn size(&self) -> Option<u64> {
        self.get("size").as_u64()
    }

    /// Modification time in epoch seconds.
    pub fn timestamp(&self) -> Option<i64> {
        self.get("timestamp").as_i64()
    }

    pub fn kind(&self) -> Option<EntryKind> {
        self.get("type").as_str().and_then(EntryKind::parse)
    }

    /// Extension derived from the name; empty for directories.
    pub fn extension(&self) -> Option<&str> {
        self.get("extension").as_str()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().unwrap_or_default())
    }
}
