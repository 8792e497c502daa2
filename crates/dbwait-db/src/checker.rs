//! The readiness capability injected into the poller.

use async_trait::async_trait;
use dbwait_common::error::CheckResult;

/// A single readiness check against a named resource.
///
/// `Ok(())` means the resource is reachable and correctly configured.
/// Implementations report transient conditions as
/// [`CheckError::ResourceUnavailable`](dbwait_common::error::CheckError::ResourceUnavailable)
/// and everything else as one of the fatal variants.
#[async_trait]
pub trait ResourceChecker: Send + Sync {
    async fn check_ready(&self, resource: &str) -> CheckResult<()>;
}
