//! Deterministic, pure logic for the block list.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod list;
pub mod outcome;
