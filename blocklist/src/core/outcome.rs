//! Request actions and their user-visible outcomes.
//!
//! Message strings are part of the console's observable behavior and must
//! not change.

use std::fmt;

/// Mutation requested through the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Block,
    Unblock,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Block => "block",
            Action::Unblock => "unblock",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of applying an [`Action`] to the block list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was empty after trimming. Nothing changed, nothing written.
    NoUrl,
    /// Input contained a line break. Nothing changed, nothing written.
    MultiLine,
    Blocked(String),
    AlreadyBlocked(String),
    Unblocked(String),
    NotBlocked(String),
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::NoUrl => "No URL provided.".to_string(),
            Outcome::MultiLine => "URL must not contain line breaks.".to_string(),
            Outcome::Blocked(url) => format!("Blocked URL: {url}"),
            Outcome::AlreadyBlocked(url) => format!("URL already blocked: {url}"),
            Outcome::Unblocked(url) => format!("Unblocked URL: {url}"),
            Outcome::NotBlocked(url) => format!("URL not in block list: {url}"),
        }
    }

    /// True if the in-memory list was modified.
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::Blocked(_) | Outcome::Unblocked(_))
    }

    /// True if the request rewrote the persisted file.
    ///
    /// Every non-empty request rewrites the file, even when the list did not
    /// change; the external reader relies on it.
    pub fn persisted(&self) -> bool {
        !matches!(self, Outcome::NoUrl | Outcome::MultiLine)
    }
}

/// Trim surrounding whitespace; `None` when nothing is left.
pub fn normalize_url(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// True if `url` would occupy more than one line of the list file.
pub fn has_line_break(url: &str) -> bool {
    url.contains(['\n', '\r'])
}
