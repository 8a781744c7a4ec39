//! I/O helpers for the block list and the console configuration.

pub mod config;
pub mod list_file;
