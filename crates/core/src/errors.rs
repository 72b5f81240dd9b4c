//! Error returned by checked value access.

use thiserror::Error;

/// Checked value access was attempted on an error-holding container.
///
/// Carries a copy of the held error so callers can report what went wrong
/// without keeping the container alive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad expected access: container holds an error")]
pub struct BadExpectedAccess<E> {
    error: E,
}

impl<E> BadExpectedAccess<E> {
    /// Build the access error around the held error.
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Borrow the error that was held at access time.
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consume the access error and return the held error.
    pub fn into_error(self) -> E {
        self.error
    }
}
