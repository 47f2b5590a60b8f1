//! Pure verdict evaluation (no IO).
//!
//! Input: evidence buckets produced elsewhere, waivers and options from configuration.
//! Output: a `CheckVerdict` with value, pass flag, ordered details, and severity groups.

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod model;
pub mod policy;
pub mod waiver;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{run_boolean_check, run_value_check};
pub use error::EngineError;
