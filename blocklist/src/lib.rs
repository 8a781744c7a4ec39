//! Block list store for the proxy management console.
//!
//! The console edits an ordered list of blocked URLs and mirrors it to a flat
//! file that a separate proxy process reads. The crate keeps a strict split:
//!
//! - **[`core`]**: Pure list logic and request outcomes. No I/O.
//! - **[`io`]**: The list file format and the console configuration file.
//!
//! [`store::BlockListStore`] ties the two together behind a single lock and is
//! what the HTTP layer holds.

pub mod core;
pub mod io;
pub mod logging;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
