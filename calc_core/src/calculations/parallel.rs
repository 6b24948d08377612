//! # Parallel Resistance
//!
//! ```text
//! 1 / R_total = sum(1 / R_i)
//! ```
//!
//! [`parallel_resistance`] signals non-physical input with the negative
//! sentinel [`PARALLEL_INVALID`]: any `R_i <= 0` (or NaN), or an empty set.
//! Callers must check for a negative return before treating the result as a
//! resistance. The inverse sum is accumulated in double precision.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::units::Ohms;

/// Returned by [`parallel_resistance`] for empty or non-physical input.
pub const PARALLEL_INVALID: f32 = -1.0;

/// Combine resistors in parallel, or [`PARALLEL_INVALID`].
pub fn parallel_resistance(values: &[f32]) -> f32 {
    if values.is_empty() {
        debug!("parallel combination of empty set");
        return PARALLEL_INVALID;
    }

    let mut inverse_sum = 0.0f64;
    for (index, &r) in values.iter().enumerate() {
        // `!(r > 0.0)` also catches NaN
        if !(r > 0.0) {
            debug!(index, r, "non-physical resistance in parallel set");
            return PARALLEL_INVALID;
        }
        inverse_sum += 1.0 / f64::from(r);
    }

    (1.0 / inverse_sum) as f32
}

/// Resistor set for the strict layer.
///
/// ## JSON Example
///
/// ```json
/// { "resistances_ohm": [100.0, 220.0, 470.0] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelInput {
    pub resistances_ohm: Vec<f32>,
}

impl ParallelInput {
    /// Validate input parameters. Errors name the first bad resistor, 1-based.
    pub fn validate(&self) -> CalcResult<()> {
        if self.resistances_ohm.is_empty() {
            return Err(CalcError::empty_input("resistances_ohm"));
        }
        if let Some(pos) = self.resistances_ohm.iter().position(|r| !(*r > 0.0)) {
            return Err(CalcError::invalid_input(
                format!("resistor {}", pos + 1),
                self.resistances_ohm[pos].to_string(),
                "Resistance must be > 0",
            ));
        }
        Ok(())
    }
}

/// Combined resistance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelResult {
    pub total_ohm: f32,

    /// Human-readable total (e.g. "50.00 Ω")
    pub display: String,
}

/// Combine a validated resistor set.
pub fn calculate(input: &ParallelInput) -> CalcResult<ParallelResult> {
    input.validate()?;

    let total_ohm = parallel_resistance(&input.resistances_ohm);
    if total_ohm < 0.0 {
        return Err(CalcError::Internal {
            message: "validated resistor set produced invalid sentinel".to_string(),
        });
    }

    Ok(ParallelResult {
        total_ohm,
        display: Ohms(f64::from(total_ohm)).to_string(),
    })
}
