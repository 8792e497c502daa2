//! # dbwait-cli
//!
//! The readiness poller and the command-line surface of `wait_for_db`.

pub mod cli;
pub mod poller;

pub use poller::{wait_for_resource, WaitReport, RETRY_INTERVAL};
