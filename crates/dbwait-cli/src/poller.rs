//! Readiness poller: check, pause, retry until the database answers.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use dbwait_db::ResourceChecker;

/// Fixed pause between failed checks. No growth, no jitter.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Outcome of a successful wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitReport {
    /// Checks that reported the resource unavailable before it came up.
    pub failed_attempts: u64,
}

/// Block until `checker` reports `resource` ready.
///
/// Progress goes to `out` as plain lines. Retryable failures are retried
/// forever with a [`RETRY_INTERVAL`] pause; any other failure is returned
/// immediately and nothing further is written.
pub async fn wait_for_resource<C, W>(
    checker: &C,
    resource: &str,
    out: &mut W,
) -> anyhow::Result<WaitReport>
where
    C: ResourceChecker + ?Sized,
    W: Write,
{
    say(out, "Waiting for database...")?;

    let mut failed_attempts: u64 = 0;
    loop {
        match checker.check_ready(resource).await {
            Ok(()) => break,
            Err(err) if err.is_retryable() => {
                failed_attempts += 1;
                tracing::debug!(
                    resource,
                    attempt = failed_attempts,
                    error = %err,
                    "Database not ready"
                );
                say(
                    out,
                    &format!("Database unavailable, waiting {failed_attempts} second(s)..."),
                )?;
                tokio::time::sleep(RETRY_INTERVAL).await;
            }
            Err(err) => {
                tracing::error!(resource, error = %err, "Readiness check aborted");
                return Err(err)
                    .with_context(|| format!("Readiness check for '{resource}' failed"));
            }
        }
    }

    say(out, "Database available")?;
    Ok(WaitReport { failed_attempts })
}

fn say<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}
