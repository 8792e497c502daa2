//! # wait_for_db
//!
//! Run before the application at container start. Prints progress to stdout,
//! exits 0 once the configured database answers, and exits non-zero with the
//! error chain on stderr if the check fails in a way retrying cannot fix.

use anyhow::Context;
use dbwait_cli::cli::Cli;
use dbwait_cli::wait_for_resource;
use dbwait_db::PgChecker;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::from_env_and_args(None, std::env::args_os()).unwrap_or_else(|e| e.exit());

    // Diagnostics go to stderr; stdout carries only the progress lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = dbwait_common::config::init(cli.config.as_deref())
        .context("Failed to load database configuration")?;
    let checker = PgChecker::new(config);

    let mut stdout = std::io::stdout().lock();
    let report = wait_for_resource(&checker, &cli.database, &mut stdout).await?;
    tracing::info!(
        database = %cli.database,
        failed_attempts = report.failed_attempts,
        "Database ready"
    );

    Ok(())
}
