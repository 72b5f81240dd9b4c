//! Error-payload tag used to build and compare error-holding containers.

use std::fmt;

/// Marks a value as the error side of an [`Expected`](crate::Expected).
///
/// `Unexpected` exists so that an error can be handed to a container without
/// any doubt about which side it lands on, even when `V` and `E` are the same
/// type.
///
/// ```
/// use expected_core::{Expected, Unexpected};
///
/// let failed: Expected<i32, i32> = Unexpected::new(42).into();
/// assert!(!failed.has_value());
/// assert_eq!(failed, Unexpected::new(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Unexpected<E>(E);

impl<E> Unexpected<E> {
    /// Wrap an error payload.
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    /// Borrow the wrapped error.
    pub const fn error(&self) -> &E {
        &self.0
    }

    /// Mutably borrow the wrapped error.
    pub const fn error_mut(&mut self) -> &mut E {
        &mut self.0
    }

    /// Consume the wrapper and return the error.
    pub fn into_error(self) -> E {
        self.0
    }

    /// Transform the wrapped error.
    #[must_use]
    pub fn map<G, F>(self, op: F) -> Unexpected<G>
    where
        F: FnOnce(E) -> G,
    {
        Unexpected(op(self.0))
    }
}

impl<E: fmt::Display> fmt::Display for Unexpected<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unexpected: {}", self.0)
    }
}
