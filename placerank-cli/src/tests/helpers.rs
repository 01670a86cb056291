//! Test helpers for writing CLI input files.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const PLACES_JSON: &str = r#"[
    {"id": "sports-bar", "category": "bar", "baseMatchScore": 8.0, "tags": ["crowded", "loud"]},
    {"id": "tea-house", "category": "카페", "baseMatchScore": 7.0, "tags": ["조용한", "아늑한"]}
]"#;

pub(super) const SAD_CONTEXT_JSON: &str = r#"{"mood": {"label": "sad", "intensity": 5}}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding CLI input files.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
