//! Version gating layer
//!
//! # Modules
//!
//! - [`error`]: Error type returned by the range check
//! - [`semver`]: Parsing helpers over the `semver` crate
//! - [`versioner`]: The `Versioner` contract, default implementation, and
//!   range-containment check

pub mod error;
pub mod semver;
pub mod versioner;
