//! Test modules for Makai Suggest.
//!
//! This module contains the crate-internal suites that cut across
//! components:
//! - engine-level behavior of the facade and its strategy dispatch
//! - cross-strategy equivalence, the property the whole comparison
//!   exercise exists to demonstrate
//!
//! Per-index unit and property tests live next to their structures.

pub mod engine_tests;
pub mod test_utils;
