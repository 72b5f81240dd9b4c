//! Construction fixtures and call counters.

use std::cell::Cell;

/// Lowercase alphabet used as a distinguishable string payload.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// The alphabet reversed.
pub const REVERSED: &str = "zyxwvutsrqponmlkjihgfedcba";

/// Built from a leading sequence plus extra arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakesSequenceAndArgs {
    /// Elements of the leading sequence.
    pub values: Vec<i32>,
    /// The trailing arguments.
    pub pair: (i32, i32),
}

impl<const N: usize> From<([i32; N], i32, i32)> for TakesSequenceAndArgs {
    fn from((values, first, second): ([i32; N], i32, i32)) -> Self {
        Self {
            values: values.to_vec(),
            pair: (first, second),
        }
    }
}

/// Payload without a `Default` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoDefault(pub i32);

/// Payload without a `Clone` impl.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct NotClone(pub i32);

/// Counts closure invocations.
#[derive(Debug, Default)]
pub struct CallCounter(Cell<usize>);

impl CallCounter {
    /// Record one call.
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Number of calls recorded.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}
