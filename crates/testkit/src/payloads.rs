//! Payload doubles with observable or failing copy behavior.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Payload whose `Clone` always panics.
///
/// Moving it is fine; only copying fails. Used to check that a container
/// which panics while copying its incoming payload keeps its prior state.
#[derive(Debug, PartialEq, Eq)]
pub struct PanicOnClone {
    /// Identifies the instance in assertions.
    pub id: i32,
}

impl PanicOnClone {
    /// Create a payload with the given id.
    pub const fn new(id: i32) -> Self {
        Self { id }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        panic!("PanicOnClone({}) cannot be cloned", self.id)
    }
}

/// String payload whose `Clone` panics when `PANICS` is set.
#[derive(Debug, PartialEq, Eq)]
pub struct CloneGate<const PANICS: bool>(pub String);

impl<const PANICS: bool> CloneGate<PANICS> {
    /// Wrap a string payload.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the wrapped text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl<const PANICS: bool> Clone for CloneGate<PANICS> {
    fn clone(&self) -> Self {
        assert!(!PANICS, "CloneGate({}) refuses to clone", self.0);
        Self(self.0.clone())
    }
}

impl<const PANICS: bool> From<&str> for CloneGate<PANICS> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Stand-in constructor that always panics with `reason`.
pub fn failing_constructor<T>(reason: &str) -> T {
    panic!("{reason}")
}

/// Shared counters for clone, `clone_from`, and drop events.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    clones: Arc<AtomicUsize>,
    clone_froms: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl Ledger {
    /// Number of `clone` calls recorded.
    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }

    /// Number of `clone_from` calls recorded.
    pub fn clone_froms(&self) -> usize {
        self.clone_froms.load(Ordering::SeqCst)
    }

    /// Number of drops recorded.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// Payload that reports clones, in-place assignments, and drops to a
/// [`Ledger`].
#[derive(Debug)]
pub struct Tracked<T> {
    /// Wrapped value.
    pub value: T,
    ledger: Ledger,
}

impl<T> Tracked<T> {
    /// Wrap `value`, reporting to `ledger`.
    pub fn new(value: T, ledger: &Ledger) -> Self {
        Self {
            value,
            ledger: ledger.clone(),
        }
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.ledger.clones.fetch_add(1, Ordering::SeqCst);
        Self {
            value: self.value.clone(),
            ledger: self.ledger.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.ledger.clone_froms.fetch_add(1, Ordering::SeqCst);
        self.value.clone_from(&source.value);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.ledger.drops.fetch_add(1, Ordering::SeqCst);
    }
}
