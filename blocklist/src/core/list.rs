//! Ordered, duplicate-free list of blocked URLs.

/// In-memory block list.
///
/// Entries keep insertion order. Membership is exact string equality: no
/// normalization, no URL parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    entries: Vec<String>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from raw entries, dropping later duplicates.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for entry in entries {
            list.add(entry.into());
        }
        list
    }

    /// Append `url` unless already present. Returns true if the list changed.
    pub fn add(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.contains(&url) {
            return false;
        }
        self.entries.push(url);
        true
    }

    /// Remove the matching entry. Returns true if the list changed.
    pub fn remove(&mut self, url: &str) -> bool {
        match self.entries.iter().position(|entry| entry == url) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| entry == url)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
