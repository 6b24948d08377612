//! # calc_core - Electrical Engineering Calculation Library
//!
//! `calc_core` holds all the numeric work of the engineering toolkit:
//! resistor colour-code decoding, Ohm's law, RC cutoff frequency, sample
//! statistics and parallel resistance, plus a self-test routine.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every function is referentially transparent
//! - **Total at the edge**: the flat functions never panic; degenerate input
//!   comes back as a documented sentinel (`-1.0`, `0.0` or IEEE infinity)
//! - **Strict when asked**: each calculation also has a validating
//!   `calculate(input)` returning a structured [`CalcError`]
//! - **Fixed widths**: the resistor decoder works in `f64`, everything else
//!   in `f32`, matching the C ABI in [`ffi`]
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{ohms_law, parallel_resistance, resistor_value, PARALLEL_INVALID};
//!
//! assert_eq!(resistor_value(2, 2, 3), 22_000.0);
//! assert_eq!(ohms_law(1, 0.0, 2.0, 10.0), 20.0);
//! assert_eq!(parallel_resistance(&[100.0, 100.0]), 50.0);
//! assert_eq!(parallel_resistance(&[100.0, -5.0]), PARALLEL_INVALID);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Calculation types and functions
//! - [`self_test`] - Known-answer diagnostic harness
//! - [`ffi`] - Flat `extern "C"` function table
//! - [`units`] - SI unit wrappers and formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod ffi;
pub mod self_test;
pub mod units;

// Re-export the flat function table at crate root
pub use calculations::ohms_law::ohms_law;
pub use calculations::parallel::{parallel_resistance, PARALLEL_INVALID};
pub use calculations::rc_filter::rc_cutoff;
pub use calculations::resistor::{resistor_value, RESISTOR_INVALID};
pub use calculations::statistics::{stats_mean, stats_rms};
pub use self_test::run_self_test;

pub use calculations::{CalculationItem, CalculationOutcome};
pub use errors::{CalcError, CalcResult};
