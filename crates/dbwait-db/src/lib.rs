//! # dbwait-db
//!
//! Readiness checks against configured databases.
//! - **checker** — the [`ResourceChecker`] capability the poller is written against
//! - **postgres** — a PostgreSQL implementation that opens one transient connection per check

pub mod checker;
pub mod postgres;

pub use checker::ResourceChecker;
pub use postgres::PgChecker;
