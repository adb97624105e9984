//! Common utilities for the Kestrel crates.
//!
//! This crate provides shared infrastructure used by all Kestrel components:
//! - **Warning System** - colored terminal output for suspicious but accepted input

pub mod warning;
