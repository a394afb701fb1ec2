//! Foundation utilities
//!
//! Low-level building blocks with no rendering semantics: math types and
//! logging setup.

pub mod logging;
pub mod math;
