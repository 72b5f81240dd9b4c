//! The value-or-error container.

use crate::errors::BadExpectedAccess;
use crate::storage::{Repr, Slot, access_violation};
use crate::unexpected::Unexpected;
use std::ops::{Deref, DerefMut};

/// Holds either a success value of type `V` or an error of type `E`.
///
/// `Expected<(), E>` is the "success without payload" form.
///
/// The container is `Copy` exactly when both payload types are, and has no
/// drop glue exactly when neither payload has any.
///
/// ```
/// use expected_core::Expected;
///
/// let mut a: Expected<i32, i32> = Expected::new(42);
/// let b: Expected<i32, i32> = Expected::new(17);
/// a = b;
/// assert!(a.has_value());
/// assert_eq!(*a, 17);
/// ```
#[derive(Debug, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Expected<V, E> {
    repr: Repr<V, E>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl<V, E> Expected<V, E> {
    /// Build a success-holding container.
    pub const fn new(value: V) -> Self {
        Self {
            repr: Repr::Value(value),
        }
    }

    /// Build an error-holding container from an already built error.
    pub const fn from_error(error: E) -> Self {
        Self {
            repr: Repr::Error(error),
        }
    }

    /// Build an error-holding container, constructing `E` from `args`.
    ///
    /// ```
    /// use expected_core::Expected;
    ///
    /// let failed: Expected<i32, String> = Expected::unexpect("missing");
    /// assert_eq!(failed.error(), "missing");
    /// ```
    pub fn unexpect<A>(args: A) -> Self
    where
        E: From<A>,
    {
        Self::from_error(E::from(args))
    }

    /// Build a success-holding container, constructing `V` from `args`.
    ///
    /// Tuples forward several arguments; arrays give the "sequence" form and
    /// `(sequence, args...)` tuples the sequence-plus-arguments form, for any
    /// `V` that implements the matching `From`.
    ///
    /// ```
    /// use expected_core::Expected;
    ///
    /// let listed: Expected<Vec<i32>, i32> = Expected::in_place([0, 1]);
    /// assert_eq!(*listed, vec![0, 1]);
    /// ```
    pub fn in_place<A>(args: A) -> Self
    where
        V: From<A>,
    {
        Self::new(V::from(args))
    }

    /// Build a success-holding container from a constructor closure.
    pub fn in_place_with<F>(make: F) -> Self
    where
        F: FnOnce() -> V,
    {
        Self::new(make())
    }

    /// Convert both payloads into related types.
    ///
    /// ```
    /// use expected_core::Expected;
    ///
    /// let narrow: Expected<u8, &str> = Expected::from_error("bad");
    /// let wide: Expected<u32, String> = narrow.convert();
    /// assert_eq!(wide.error(), "bad");
    /// ```
    pub fn convert<U, G>(self) -> Expected<U, G>
    where
        U: From<V>,
        G: From<E>,
    {
        match self.repr {
            Repr::Value(value) => Expected::new(U::from(value)),
            Repr::Error(error) => Expected::from_error(G::from(error)),
        }
    }
}

impl<V: Default, E> Default for Expected<V, E> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V, E> From<Unexpected<E>> for Expected<V, E> {
    fn from(unexpected: Unexpected<E>) -> Self {
        Self::from_error(unexpected.into_error())
    }
}

impl<V, E> From<Result<V, E>> for Expected<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::new(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<V, E> From<Expected<V, E>> for Result<V, E> {
    fn from(expected: Expected<V, E>) -> Self {
        expected.into_result()
    }
}

// =============================================================================
// COPY + ASSIGNMENT
// =============================================================================

#[expect(
    clippy::expl_impl_clone_on_copy,
    reason = "clone_from must route through the payloads' own clone_from, which the derive does not do"
)]
impl<V: Clone, E: Clone> Clone for Expected<V, E> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
        }
    }

    /// Copy-assign from `source`.
    ///
    /// When both sides hold the same kind of payload it is assigned through
    /// the payload's own `clone_from`. Otherwise the incoming payload is
    /// cloned before the current one is dropped: if that clone panics, `self`
    /// keeps its previous state.
    fn clone_from(&mut self, source: &Self) {
        self.repr.assign_from(&source.repr);
    }
}

impl<V, E> Expected<V, E> {
    /// Copy-assign from `source` and return `self` for chaining.
    pub fn assign_from(&mut self, source: &Self) -> &mut Self
    where
        V: Clone,
        E: Clone,
    {
        self.clone_from(source);
        self
    }

    /// Assign a success value.
    ///
    /// A live value is assigned in place; a live error is dropped and
    /// replaced.
    pub fn set_value(&mut self, value: V) -> &mut V {
        self.repr.put_value(value)
    }

    /// Assign an error.
    pub fn set_error(&mut self, error: E) -> &mut E {
        self.repr.put_error(error)
    }

    /// Assign the error carried by an [`Unexpected`].
    pub fn set_unexpected(&mut self, unexpected: Unexpected<E>) -> &mut E {
        self.set_error(unexpected.into_error())
    }

    /// Replace the current payload with a value built from `args`.
    ///
    /// The new value is constructed before anything is dropped, so a
    /// panicking constructor leaves the container unchanged.
    pub fn emplace<A>(&mut self, args: A) -> &mut V
    where
        V: From<A>,
    {
        self.emplace_with(|| V::from(args))
    }

    /// Replace the current payload with the value produced by `make`.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let value = make();
        tracing::trace!(
            event = "expected.emplace",
            previous = self.repr.slot().as_str(),
            "emplacing value"
        );
        self.repr.replace_with_value(value)
    }

    /// Exchange the contents of two containers.
    ///
    /// Same-kind payloads are swapped in place; otherwise the containers
    /// trade states. The operation cannot fail part-way.
    pub fn swap(&mut self, other: &mut Self) {
        self.repr.swap(&mut other.repr);
    }

    /// Take the payload out, leaving `V::default()` behind.
    #[must_use]
    pub fn take(&mut self) -> Self
    where
        V: Default,
    {
        std::mem::take(self)
    }
}

// =============================================================================
// OBSERVERS
// =============================================================================

impl<V, E> Expected<V, E> {
    /// Returns true when a success value is held.
    pub const fn has_value(&self) -> bool {
        matches!(self.repr, Repr::Value(_))
    }

    /// Returns true when an error is held.
    pub const fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Borrow the value, or `None` while an error is held.
    pub const fn as_value(&self) -> Option<&V> {
        match &self.repr {
            Repr::Value(value) => Some(value),
            Repr::Error(_) => None,
        }
    }

    /// Borrow the error, or `None` while a value is held.
    pub const fn as_error(&self) -> Option<&E> {
        match &self.repr {
            Repr::Error(error) => Some(error),
            Repr::Value(_) => None,
        }
    }

    /// Consume into the value, discarding an error.
    pub fn ok(self) -> Option<V> {
        match self.repr {
            Repr::Value(value) => Some(value),
            Repr::Error(_) => None,
        }
    }

    /// Consume into the error, discarding a value.
    pub fn err(self) -> Option<E> {
        match self.repr {
            Repr::Error(error) => Some(error),
            Repr::Value(_) => None,
        }
    }

    /// Checked access to the value.
    ///
    /// ```
    /// use expected_core::Expected;
    ///
    /// let failed: Expected<i32, &str> = Expected::from_error("boom");
    /// let denied = failed.value().unwrap_err();
    /// assert_eq!(*denied.error(), "boom");
    /// ```
    pub fn value(&self) -> Result<&V, BadExpectedAccess<E>>
    where
        E: Clone,
    {
        match &self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(bad_access(error.clone())),
        }
    }

    /// Checked mutable access to the value.
    pub fn value_mut(&mut self) -> Result<&mut V, BadExpectedAccess<E>>
    where
        E: Clone,
    {
        match &mut self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(bad_access(error.clone())),
        }
    }

    /// Checked access that consumes the container.
    pub fn into_value(self) -> Result<V, BadExpectedAccess<E>> {
        match self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(bad_access(error)),
        }
    }

    /// Unchecked access to the error.
    ///
    /// Calling this on a success-holding container is a caller bug and
    /// panics.
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.repr {
            Repr::Error(error) => error,
            Repr::Value(_) => access_violation(Slot::Error),
        }
    }

    /// Unchecked mutable access to the error.
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        self.repr.error_slot()
    }

    /// Unchecked access that consumes the container and returns the error.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.repr {
            Repr::Error(error) => error,
            Repr::Value(_) => access_violation(Slot::Error),
        }
    }

    /// Copy of the value, or `default` converted into `V`.
    pub fn value_or<U>(&self, default: U) -> V
    where
        V: Clone,
        U: Into<V>,
    {
        match &self.repr {
            Repr::Value(value) => value.clone(),
            Repr::Error(_) => default.into(),
        }
    }

    /// The value, or `default` converted into `V`.
    pub fn into_value_or<U>(self, default: U) -> V
    where
        U: Into<V>,
    {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => default.into(),
        }
    }

    /// The value, or one computed from the error.
    pub fn value_or_else<F>(self, op: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => op(error),
        }
    }

    /// Returns true when a value equal to `candidate` is held.
    pub fn contains_value<U>(&self, candidate: &U) -> bool
    where
        V: PartialEq<U>,
    {
        matches!(&self.repr, Repr::Value(value) if value == candidate)
    }

    /// Returns true when an error equal to `candidate` is held.
    pub fn contains_error<G>(&self, candidate: &G) -> bool
    where
        E: PartialEq<G>,
    {
        matches!(&self.repr, Repr::Error(error) if error == candidate)
    }

    /// Convert into the standard library result.
    pub fn into_result(self) -> Result<V, E> {
        match self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(error),
        }
    }

    /// Borrow both payloads.
    pub const fn as_ref(&self) -> Expected<&V, &E> {
        match &self.repr {
            Repr::Value(value) => Expected::new(value),
            Repr::Error(error) => Expected::from_error(error),
        }
    }

    /// Mutably borrow both payloads.
    pub const fn as_mut(&mut self) -> Expected<&mut V, &mut E> {
        match &mut self.repr {
            Repr::Value(value) => Expected::new(value),
            Repr::Error(error) => Expected::from_error(error),
        }
    }
}

impl<V: Clone, E: Clone> Expected<&V, &E> {
    /// Clone both borrowed payloads.
    pub fn cloned(self) -> Expected<V, E> {
        match self.repr {
            Repr::Value(value) => Expected::new(value.clone()),
            Repr::Error(error) => Expected::from_error(error.clone()),
        }
    }
}

impl<V: Copy, E: Copy> Expected<&V, &E> {
    /// Copy both borrowed payloads.
    pub const fn copied(self) -> Expected<V, E> {
        match self.repr {
            Repr::Value(value) => Expected::new(*value),
            Repr::Error(error) => Expected::from_error(*error),
        }
    }
}

/// Unchecked access to the value. Dereferencing an error-holding container
/// is a caller bug and panics.
impl<V, E> Deref for Expected<V, E> {
    type Target = V;

    #[track_caller]
    fn deref(&self) -> &V {
        match &self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => access_violation(Slot::Value),
        }
    }
}

impl<V, E> DerefMut for Expected<V, E> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut V {
        self.repr.value_slot()
    }
}

fn bad_access<E>(error: E) -> BadExpectedAccess<E> {
    tracing::debug!(
        event = "expected.bad_access",
        "checked value access on an error-holding Expected"
    );
    BadExpectedAccess::new(error)
}

// =============================================================================
// COMPARISON
// =============================================================================

impl<V, E: PartialEq> PartialEq<Unexpected<E>> for Expected<V, E> {
    fn eq(&self, other: &Unexpected<E>) -> bool {
        self.contains_error(other.error())
    }
}

impl<V, E: PartialEq> PartialEq<Expected<V, E>> for Unexpected<E> {
    fn eq(&self, other: &Expected<V, E>) -> bool {
        other == self
    }
}
