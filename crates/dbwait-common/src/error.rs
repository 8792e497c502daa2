//! Error taxonomy for readiness checks.
//!
//! Every failure a checker can report collapses into one of these variants.
//! Only [`CheckError::ResourceUnavailable`] is retried by the poller; the rest
//! abort the wait immediately.

/// Boxed driver error carried by [`CheckError::Unexpected`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    // === Retryable ===
    /// The resource could not be reached, is misconfigured, or reported itself
    /// as not ready. Connection errors from the driver and operational errors
    /// reported by the server both land here and are treated identically.
    #[error("Resource '{resource}' unavailable: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    // === Fatal ===
    #[error("No database configured under alias '{alias}'")]
    UnknownAlias { alias: String },

    #[error("Unexpected error while checking '{resource}'")]
    Unexpected {
        resource: String,
        #[source]
        source: BoxError,
    },
}

impl CheckError {
    pub fn unavailable(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the poller should sleep and try again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ResourceUnavailable { .. })
    }
}

pub type CheckResult<T> = Result<T, CheckError>;
