//! # expected-testkit
//!
//! Test doubles for exercising `expected-core`: payloads whose `Clone`
//! panics, clone/drop ledgers, construction fixtures, a trait probe, and a
//! tracing subscriber for tests.
//! This crate has no workspace dependencies.

pub mod fixtures;
pub mod payloads;
pub mod probe;
pub mod tracing_setup;

pub use fixtures::{ALPHABET, CallCounter, NoDefault, NotClone, REVERSED, TakesSequenceAndArgs};
pub use payloads::{CloneGate, Ledger, PanicOnClone, Tracked, failing_constructor};
pub use tracing_setup::init_test_tracing;

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
