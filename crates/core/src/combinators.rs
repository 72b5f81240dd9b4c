//! Functional combinators over [`Expected`].
//!
//! Every combinator only runs its closure on the branch it is named for; the
//! other branch is forwarded untouched and the closure is dropped unused.
//! Owned forms consume the container and move the forwarded payload; `_ref`
//! forms borrow it and clone the forwarded payload. For the `&mut` category
//! go through [`Expected::as_mut`].

use crate::Expected;

impl<V, E> Expected<V, E> {
    /// Transform the value, forwarding an error unchanged.
    ///
    /// A closure returning `()` yields the payload-less `Expected<(), E>`.
    ///
    /// ```
    /// use expected_core::Expected;
    ///
    /// let failed: Expected<i32, i32> = Expected::unexpect(21);
    /// let mapped = failed.map(|x| x * 2);
    /// assert!(!mapped.has_value());
    /// assert_eq!(*mapped.error(), 21);
    /// ```
    pub fn map<U, F>(self, op: F) -> Expected<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self.into_result() {
            Ok(value) => Expected::new(op(value)),
            Err(error) => Expected::from_error(error),
        }
    }

    /// Transform a borrowed value, cloning a forwarded error.
    pub fn map_ref<U, F>(&self, op: F) -> Expected<U, E>
    where
        E: Clone,
        F: FnOnce(&V) -> U,
    {
        match self.as_ref().into_result() {
            Ok(value) => Expected::new(op(value)),
            Err(error) => Expected::from_error(error.clone()),
        }
    }

    /// Transform the error, forwarding a value unchanged.
    pub fn map_error<G, F>(self, op: F) -> Expected<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self.into_result() {
            Ok(value) => Expected::new(value),
            Err(error) => Expected::from_error(op(error)),
        }
    }

    /// Transform a borrowed error, cloning a forwarded value.
    pub fn map_error_ref<G, F>(&self, op: F) -> Expected<V, G>
    where
        V: Clone,
        F: FnOnce(&E) -> G,
    {
        match self.as_ref().into_result() {
            Ok(value) => Expected::new(value.clone()),
            Err(error) => Expected::from_error(op(error)),
        }
    }

    /// Chain a fallible step on the value.
    ///
    /// The closure's container is returned as is, never nested.
    ///
    /// ```
    /// use expected_core::Expected;
    ///
    /// let parsed: Expected<&str, String> = Expected::new("42");
    /// let number = parsed.and_then(|text| match text.parse::<i32>() {
    ///     Ok(number) => Expected::new(number),
    ///     Err(error) => Expected::from_error(error.to_string()),
    /// });
    /// assert_eq!(number, Expected::new(42));
    /// ```
    pub fn and_then<U, F>(self, op: F) -> Expected<U, E>
    where
        F: FnOnce(V) -> Expected<U, E>,
    {
        match self.into_result() {
            Ok(value) => op(value),
            Err(error) => Expected::from_error(error),
        }
    }

    /// Chain a fallible step on a borrowed value, cloning a forwarded error.
    pub fn and_then_ref<U, F>(&self, op: F) -> Expected<U, E>
    where
        E: Clone,
        F: FnOnce(&V) -> Expected<U, E>,
    {
        match self.as_ref().into_result() {
            Ok(value) => op(value),
            Err(error) => Expected::from_error(error.clone()),
        }
    }

    /// Recover from the error with a fallible step.
    ///
    /// The closure's container is returned as is; a held value is forwarded
    /// without calling the closure.
    pub fn or_else<G, F>(self, op: F) -> Expected<V, G>
    where
        F: FnOnce(E) -> Expected<V, G>,
    {
        match self.into_result() {
            Ok(value) => Expected::new(value),
            Err(error) => op(error),
        }
    }

    /// Recover from a borrowed error, cloning a forwarded value.
    pub fn or_else_ref<G, F>(&self, op: F) -> Expected<V, G>
    where
        V: Clone,
        F: FnOnce(&E) -> Expected<V, G>,
    {
        match self.as_ref().into_result() {
            Ok(value) => Expected::new(value.clone()),
            Err(error) => op(error),
        }
    }

    /// Observe the error for its side effect and keep it.
    ///
    /// This is the side-effect-only recovery: the original error is returned
    /// unchanged after `op` runs.
    #[must_use]
    pub fn inspect_error<F>(self, op: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Some(error) = self.as_error() {
            op(error);
        }
        self
    }

    /// Observe the value for its side effect and keep it.
    #[must_use]
    pub fn inspect<F>(self, op: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Some(value) = self.as_value() {
            op(value);
        }
        self
    }
}
