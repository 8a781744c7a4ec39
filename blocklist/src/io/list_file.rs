//! Plain-text block list file shared with the proxy process.
//!
//! Format: one raw URL per line, each line `\n`-terminated, UTF-8, no header.
//! An empty list is an empty file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Exact file contents for `entries`.
pub fn format_list<S: AsRef<str>>(entries: &[S]) -> String {
    let mut buf = String::new();
    for entry in entries {
        buf.push_str(entry.as_ref());
        buf.push('\n');
    }
    buf
}

/// Truncate and rewrite the list file in place.
///
/// The write is not atomic: the reader may observe a partially written file.
pub fn write_list<S: AsRef<str>>(path: &Path, entries: &[S]) -> Result<()> {
    debug!(path = %path.display(), entries = entries.len(), "writing block list");
    fs::write(path, format_list(entries))
        .with_context(|| format!("write block list {}", path.display()))
}

/// Read entries from a list file.
///
/// A missing file yields no entries. Blank lines are skipped, `\r\n` endings
/// are accepted, and duplicates keep their first occurrence.
pub fn load_list(path: &Path) -> Result<Vec<String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "block list file missing");
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read block list {}", path.display()));
        }
    };

    let mut entries: Vec<String> = Vec::new();
    for line in contents.lines() {
        if line.is_empty() || entries.iter().any(|entry| entry == line) {
            continue;
        }
        entries.push(line.to_string());
    }
    debug!(path = %path.display(), entries = entries.len(), "block list loaded");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_terminates_every_line() {
        assert_eq!(
            format_list(&["http://a.test", "http://b.test"]),
            "http://a.test\nhttp://b.test\n"
        );
    }

    #[test]
    fn empty_list_formats_to_empty_file() {
        let entries: [&str; 0] = [];
        assert_eq!(format_list(&entries), "");
    }

    /// Rewriting truncates: a shorter list leaves no stale bytes behind.
    #[test]
    fn write_truncates_previous_contents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("block_list.txt");

        write_list(&path, &["http://long-entry.test", "http://b.test"]).expect("write");
        write_list(&path, &["x"]).expect("rewrite");

        assert_eq!(fs::read_to_string(&path).expect("read"), "x\n");
    }

    #[test]
    fn write_into_missing_directory_fails_with_path_context() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("missing").join("block_list.txt");

        let err = write_list(&path, &["x"]).expect_err("should fail");
        assert!(format!("{err:#}").contains("block_list.txt"));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let entries = load_list(&temp.path().join("absent.txt")).expect("load");
        assert!(entries.is_empty());
    }

    #[test]
    fn load_skips_blank_lines_and_duplicates() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("block_list.txt");
        fs::write(&path, "a\r\n\nb\na\n\nc").expect("seed");

        let entries = load_list(&path).expect("load");
        assert_eq!(entries, ["a", "b", "c"]);
    }

    #[test]
    fn load_reads_back_written_list() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("block_list.txt");
        let entries = vec!["http://a.test".to_string(), "http://b.test/path?q=1".to_string()];

        write_list(&path, &entries).expect("write");
        assert_eq!(load_list(&path).expect("load"), entries);
    }
}
