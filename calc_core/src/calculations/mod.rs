//! # Electrical Calculations
//!
//! Each calculation module has two layers:
//!
//! - a total scalar function (`resistor_value`, `ohms_law`, ...) that never
//!   fails and reports degenerate input through its return value; the flat
//!   ABI in [`crate::ffi`] is a thin shim over these
//! - `*Input` / `*Result` types with `calculate(input) -> CalcResult<*Result>`
//!   that validate first and return a structured [`CalcError`]
//!
//! ## Available Calculations
//!
//! - [`resistor`] - Resistor colour-code decoder
//! - [`ohms_law`] - Ohm's law solver
//! - [`rc_filter`] - RC low-pass cutoff frequency
//! - [`statistics`] - Mean and RMS of a sample set
//! - [`parallel`] - Parallel resistance combiner

pub mod ohms_law;
pub mod parallel;
pub mod rc_filter;
pub mod resistor;
pub mod statistics;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use ohms_law::{OhmsLawInput, OhmsLawMode, OhmsLawResult};
pub use parallel::{ParallelInput, ParallelResult};
pub use rc_filter::{RcFilterInput, RcFilterResult};
pub use resistor::{ColorBand, ResistorBands, ResistorResult};
pub use statistics::{StatisticsInput, StatisticsResult};

/// Enum wrapper for all calculation requests.
///
/// Lets a front-end dispatch any request through one entry point and echo
/// it as tagged JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Resistor(ResistorBands),
    OhmsLaw(OhmsLawInput),
    RcFilter(RcFilterInput),
    Statistics(StatisticsInput),
    Parallel(ParallelInput),
}

/// Result of [`CalculationItem::calculate`], tagged like the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Resistor(ResistorResult),
    OhmsLaw(OhmsLawResult),
    RcFilter(RcFilterResult),
    Statistics(StatisticsResult),
    Parallel(ParallelResult),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Resistor(_) => "Resistor",
            CalculationItem::OhmsLaw(_) => "OhmsLaw",
            CalculationItem::RcFilter(_) => "RcFilter",
            CalculationItem::Statistics(_) => "Statistics",
            CalculationItem::Parallel(_) => "Parallel",
        }
    }

    /// Validate and run the wrapped calculation.
    pub fn calculate(&self) -> CalcResult<CalculationOutcome> {
        let outcome = match self {
            CalculationItem::Resistor(bands) => {
                bands.validate()?;
                CalculationOutcome::Resistor(resistor::calculate(bands))
            }
            CalculationItem::OhmsLaw(input) => CalculationOutcome::OhmsLaw(ohms_law::calculate(input)?),
            CalculationItem::RcFilter(input) => CalculationOutcome::RcFilter(rc_filter::calculate(input)?),
            CalculationItem::Statistics(input) => {
                CalculationOutcome::Statistics(statistics::calculate(input)?)
            }
            CalculationItem::Parallel(input) => CalculationOutcome::Parallel(parallel::calculate(input)?),
        };
        Ok(outcome)
    }
}

impl CalculationOutcome {
    /// One-line human summary of the result
    pub fn summary(&self) -> String {
        match self {
            CalculationOutcome::Resistor(r) => format!("Resistance: {}", r.display),
            CalculationOutcome::OhmsLaw(r) => format!("{} = {}", r.mode, r.display),
            CalculationOutcome::RcFilter(r) => format!("Cut-off Frequency: {}", r.display),
            CalculationOutcome::Statistics(r) => {
                format!("Mean: {:.4} | RMS: {:.4} (n = {})", r.mean, r.rms, r.count)
            }
            CalculationOutcome::Parallel(r) => format!("Total Parallel Resistance: {}", r.display),
        }
    }
}

/// Parse a comma-separated list of numbers, e.g. `"1.5, 2.5, 3.5"`.
///
/// Shared by front-ends that collect sample sets or resistor lists as text.
pub fn parse_number_list(text: &str) -> CalcResult<Vec<f32>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| {
            s.parse::<f32>()
                .map_err(|_| CalcError::invalid_input(format!("value {}", i + 1), s, "Not a number"))
        })
        .collect()
}
