use thiserror::Error;

/// A check that did not hold, carrying its fully formatted message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    /// Create a `Failure` from an already formatted message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Return the formatted message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure and return its message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}
