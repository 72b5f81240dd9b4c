//! Tagged storage for the value-or-error payload.
//!
//! `Repr` is the single source of truth for the discriminant: the enum tag is
//! the "has value" flag, so the live payload and the flag cannot disagree.
//! Every transition here builds the incoming payload before the outgoing one
//! is dropped, which keeps a panicking payload constructor from leaving a
//! half-replaced slot behind.

use std::mem;

/// Discriminated storage holding exactly one of `V` or `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Repr<V, E> {
    /// Success payload.
    Value(V),
    /// Error payload.
    Error(E),
}

/// Which member of the storage is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The success member.
    Value,
    /// The error member.
    Error,
}

impl Slot {
    /// Stable label for trace events.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Error => "error",
        }
    }
}

impl<V, E> Repr<V, E> {
    /// Returns the live slot.
    pub const fn slot(&self) -> Slot {
        match self {
            Self::Value(_) => Slot::Value,
            Self::Error(_) => Slot::Error,
        }
    }

    /// Store a new success payload, reusing the live slot when it already
    /// holds a value. Returns the stored value.
    pub fn put_value(&mut self, value: V) -> &mut V {
        if let Self::Value(slot) = self {
            *slot = value;
        } else {
            self.replace_with_value(value);
        }
        self.value_slot()
    }

    /// Store a new error payload, reusing the live slot when it already holds
    /// an error. Returns the stored error.
    pub fn put_error(&mut self, error: E) -> &mut E {
        if let Self::Error(slot) = self {
            *slot = error;
        } else {
            self.replace_with_error(error);
        }
        self.error_slot()
    }

    /// Drop whichever payload is live and store `value`.
    ///
    /// `value` is already built, so the only work left is an infallible move.
    pub fn replace_with_value(&mut self, value: V) -> &mut V {
        let previous = self.slot();
        *self = Self::Value(value);
        trace_transition(previous, Slot::Value);
        self.value_slot()
    }

    /// Drop whichever payload is live and store `error`.
    pub fn replace_with_error(&mut self, error: E) -> &mut E {
        let previous = self.slot();
        *self = Self::Error(error);
        trace_transition(previous, Slot::Error);
        self.error_slot()
    }

    /// Borrow the value slot, reporting a contract violation when it is not live.
    #[track_caller]
    pub fn value_slot(&mut self) -> &mut V {
        match self {
            Self::Value(slot) => slot,
            Self::Error(_) => access_violation(Slot::Value),
        }
    }

    /// Borrow the error slot, reporting a contract violation when it is not live.
    #[track_caller]
    pub fn error_slot(&mut self) -> &mut E {
        match self {
            Self::Error(slot) => slot,
            Self::Value(_) => access_violation(Slot::Error),
        }
    }

    /// Exchange the contents of two storages.
    ///
    /// Matching slots swap their payloads in place; differing slots exchange
    /// the whole storage. Neither path can fail part-way.
    pub fn swap(&mut self, other: &mut Self) {
        match (self, other) {
            (Self::Value(left), Self::Value(right)) => mem::swap(left, right),
            (Self::Error(left), Self::Error(right)) => mem::swap(left, right),
            (left, right) => {
                tracing::trace!(
                    event = "expected.swap",
                    left = left.slot().as_str(),
                    right = right.slot().as_str(),
                    "swapping across slots"
                );
                mem::swap(left, right);
            },
        }
    }
}

impl<V: Clone, E: Clone> Repr<V, E> {
    /// Copy-assign from `source`.
    ///
    /// Matching slots delegate to the payload's own `clone_from`. Differing
    /// slots clone the incoming payload first and only then drop the current
    /// one, so a panicking clone leaves `self` as it was.
    pub fn assign_from(&mut self, source: &Self) {
        match source {
            Self::Value(incoming) => {
                if let Self::Value(slot) = self {
                    slot.clone_from(incoming);
                } else {
                    let staged = incoming.clone();
                    self.replace_with_value(staged);
                }
            },
            Self::Error(incoming) => {
                if let Self::Error(slot) = self {
                    slot.clone_from(incoming);
                } else {
                    let staged = incoming.clone();
                    self.replace_with_error(staged);
                }
            },
        }
    }
}

fn trace_transition(from: Slot, to: Slot) {
    if from != to {
        tracing::trace!(
            event = "expected.transition",
            from = from.as_str(),
            to = to.as_str(),
            "payload slot changed"
        );
    }
}

/// Report unchecked access to a slot that is not live.
///
/// Unchecked accessors are a caller contract: reading the value of an
/// error-holding container (or the reverse) is a bug at the call site.
#[cold]
#[track_caller]
#[expect(
    clippy::panic,
    reason = "unchecked accessors have no error channel; misuse is a caller bug"
)]
pub fn access_violation(requested: Slot) -> ! {
    let held = match requested {
        Slot::Value => Slot::Error,
        Slot::Error => Slot::Value,
    };
    panic!(
        "unchecked {} access on an Expected holding {}",
        requested.as_str(),
        held.as_str()
    )
}
