//! Test-only fixtures for exercising the store against a real filesystem.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::store::BlockListStore;

/// Empty store whose list file lives in a fresh temp directory.
pub struct TempStore {
    /// Held so the directory outlives the store.
    pub dir: TempDir,
    pub store: BlockListStore,
}

impl TempStore {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let store = BlockListStore::new(dir.path().join("block_list.txt"));
        Ok(Self { dir, store })
    }

    pub fn path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }

    /// Raw file contents; empty if the file was never written.
    pub fn contents(&self) -> String {
        fs::read_to_string(self.store.path()).unwrap_or_default()
    }

    /// File contents split on line terminators.
    pub fn file_lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}
