//! # expected-core
//!
//! A value-or-error container: [`Expected<V, E>`] holds exactly one success
//! value of type `V` or one error of type `E`.
//!
//! - [`Expected`] - the container, with construction, assignment, emplace,
//!   swap, observers, and the `map` / `map_error` / `and_then` / `or_else`
//!   combinators
//! - [`Unexpected`] - tags a value as the error side at construction and
//!   comparison sites
//! - [`BadExpectedAccess`] - returned by checked value access on an
//!   error-holding container
//!
//! ## Design Principles
//!
//! 1. **One live payload** - the discriminant is the storage enum's tag, so it
//!    cannot drift from the payload
//! 2. **Build before drop** - every state change constructs the incoming
//!    payload before the outgoing one is released, so a panicking payload
//!    operation leaves the container as it was
//! 3. **Lazy combinators** - closures only run on the branch they are named
//!    for
//! 4. **Trait propagation** - `Copy`, `Clone`, `Default`, `Hash`, `Eq`, and
//!    drop glue follow the payload types
//!
//! ```
//! use expected_core::{Expected, Unexpected};
//!
//! let doubled = Expected::<i32, String>::new(21).map(|x| x * 2);
//! assert_eq!(*doubled, 42);
//!
//! let failed: Expected<i32, String> = Unexpected::new("nope".to_string()).into();
//! assert_eq!(failed.value_or(7), 7);
//! ```
//!
//! ## Offered Operations
//!
//! Operations that need a payload capability are simply absent when the
//! payload lacks it. Cloning needs both payloads to be `Clone`:
//!
//! ```compile_fail
//! use expected_core::Expected;
//!
//! struct Unique;
//!
//! let held: Expected<Unique, i32> = Expected::new(Unique);
//! let copy = held.clone();
//! ```
//!
//! Default construction needs `V: Default`:
//!
//! ```compile_fail
//! use expected_core::Expected;
//!
//! struct Required(i32);
//!
//! let held: Expected<Required, i32> = Expected::default();
//! ```
//!
//! In-place construction needs a `From` conversion from the arguments:
//!
//! ```compile_fail
//! use expected_core::Expected;
//!
//! let held: Expected<String, i32> = Expected::in_place(5_u8);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod combinators;
pub mod errors;
pub mod expected;
mod storage;
pub mod unexpected;

pub use errors::BadExpectedAccess;
pub use expected::Expected;
pub use unexpected::Unexpected;

/// Returns the core crate version.
#[must_use]
pub const fn core_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_crate_compiles() {
        assert!(!core_crate_version().is_empty());
    }

    #[test]
    fn public_types_are_available() {
        let value: Expected<i32, i32> = Expected::new(5);
        let mapped = value.map(|value| value + 1);
        assert!(mapped.contains_value(&6));

        let failed: Expected<i32, i32> = Unexpected::new(3).into();
        assert_eq!(failed.value().err(), Some(BadExpectedAccess::new(3)));
    }
}
