use thiserror::Error;

/// The entropy source could not fill the requested bytes.
///
/// There is no safe degraded mode for seeding from partial entropy,
/// so callers should treat this as fatal for the generator being seeded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("entropy unavailable: {reason}")]
pub struct EntropyUnavailable {
    reason: String,
}

impl EntropyUnavailable {
    pub fn new<S: Into<String>>(reason: S) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Human-readable description of the underlying failure.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<rand::Error> for EntropyUnavailable {
    fn from(err: rand::Error) -> Self {
        Self::new(err.to_string())
    }
}
