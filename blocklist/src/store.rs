//! Shared block list store: in-memory list mirrored to the list file.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use tracing::{debug, error, info};

use crate::core::list::BlockList;
use crate::core::outcome::{Action, Outcome, has_line_break, normalize_url};
use crate::io::list_file::{load_list, write_list};

/// Owns the block list and the path it is persisted to.
///
/// One mutex covers both the mutation and the file rewrite, so concurrent
/// requests never interleave their writes.
#[derive(Debug)]
pub struct BlockListStore {
    list: Mutex<BlockList>,
    path: PathBuf,
}

impl BlockListStore {
    /// Create an empty store. The file is not touched until the first
    /// non-empty request.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_list(path, BlockList::new())
    }

    pub fn with_list(path: impl Into<PathBuf>, list: BlockList) -> Self {
        Self {
            list: Mutex::new(list),
            path: path.into(),
        }
    }

    /// Create a store seeded from the entries already in `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let list = BlockList::from_entries(load_list(&path)?);
        info!(path = %path.display(), entries = list.len(), "seeded block list from file");
        Ok(Self::with_list(path, list))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current entries, in order.
    pub fn snapshot(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.entries().to_vec())
    }

    pub fn block(&self, raw_url: &str) -> Result<Outcome> {
        self.apply(Action::Block, raw_url)
    }

    pub fn unblock(&self, raw_url: &str) -> Result<Outcome> {
        self.apply(Action::Unblock, raw_url)
    }

    /// Apply `action` to the trimmed URL and rewrite the file.
    ///
    /// Blank input returns [`Outcome::NoUrl`] and input with an inner line
    /// break returns [`Outcome::MultiLine`], both without touching the file.
    /// Any other input rewrites the file even if the list is unchanged. If the
    /// rewrite fails, the list is restored to its previous contents and the
    /// error is returned.
    pub fn apply(&self, action: Action, raw_url: &str) -> Result<Outcome> {
        let Some(url) = normalize_url(raw_url) else {
            debug!(%action, "no url provided");
            return Ok(Outcome::NoUrl);
        };
        if has_line_break(url) {
            debug!(%action, "rejected url with line break");
            return Ok(Outcome::MultiLine);
        }

        let mut list = self.lock()?;
        let previous = list.clone();
        let url = url.to_string();
        let outcome = match action {
            Action::Block => {
                if list.add(url.clone()) {
                    Outcome::Blocked(url)
                } else {
                    Outcome::AlreadyBlocked(url)
                }
            }
            Action::Unblock => {
                if list.remove(&url) {
                    Outcome::Unblocked(url)
                } else {
                    Outcome::NotBlocked(url)
                }
            }
        };

        if let Err(err) = write_list(&self.path, list.entries()) {
            error!(%action, error = %format!("{err:#}"), "failed to persist block list");
            *list = previous;
            return Err(err);
        }

        if outcome.changed() {
            info!(%action, entries = list.len(), "{}", outcome.message());
        } else {
            debug!(%action, "{}", outcome.message());
        }
        Ok(outcome)
    }

    fn lock(&self) -> Result<MutexGuard<'_, BlockList>> {
        self.list
            .lock()
            .map_err(|_| anyhow!("block list lock poisoned"))
    }
}
