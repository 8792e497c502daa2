//! # dbwait-common
//!
//! Configuration and error types shared by the dbwait crates.
//! No database I/O lives here, just the connection aliases and the failure taxonomy.

pub mod config;
pub mod error;
