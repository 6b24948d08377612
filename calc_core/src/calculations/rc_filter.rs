//! # RC Low-Pass Cutoff Frequency
//!
//! ```text
//! f_c = 1 / (2 * pi * R * C)
//! ```
//!
//! [`rc_cutoff`] follows the same zero-denominator policy as the Ohm's law
//! solver: IEEE-754 division, so `R = 0` or `C = 0` yields infinity.
//! [`calculate`] requires both components to be positive.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Farads, Hertz, Ohms};

/// RC filter components.
///
/// ## JSON Example
///
/// ```json
/// { "resistance_ohm": 1000.0, "capacitance_f": 1e-6 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcFilterInput {
    /// Series resistance in ohms
    pub resistance_ohm: f64,

    /// Shunt capacitance in farads
    pub capacitance_f: f64,
}

impl RcFilterInput {
    pub fn resistance(&self) -> Ohms {
        Ohms(self.resistance_ohm)
    }

    pub fn capacitance(&self) -> Farads {
        Farads(self.capacitance_f)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.resistance_ohm > 0.0) {
            return Err(CalcError::invalid_input(
                "resistance_ohm",
                self.resistance().to_string(),
                "Component values must be positive",
            ));
        }
        if !(self.capacitance_f > 0.0) {
            return Err(CalcError::invalid_input(
                "capacitance_f",
                self.capacitance().to_string(),
                "Component values must be positive",
            ));
        }
        Ok(())
    }

    /// Time constant tau = RC in seconds
    pub fn time_constant_s(&self) -> f64 {
        self.resistance().value() * self.capacitance().value()
    }
}

/// Cutoff frequency result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcFilterResult {
    /// -3 dB frequency in hertz
    pub cutoff_hz: f64,

    /// Time constant RC in seconds
    pub time_constant_s: f64,

    /// Human-readable cutoff (e.g. "159.15 Hz")
    pub display: String,
}

/// Single-precision cutoff frequency.
pub fn rc_cutoff(r: f32, c: f32) -> f32 {
    let denominator = 2.0 * PI * r * c;
    if denominator == 0.0 {
        debug!(r, c, "RC cutoff with zero component");
    }
    1.0 / denominator
}

/// Cutoff for validated, positive components.
pub fn calculate(input: &RcFilterInput) -> CalcResult<RcFilterResult> {
    input.validate()?;

    let tau = input.time_constant_s();
    let cutoff = Hertz(1.0 / (2.0 * std::f64::consts::PI * tau));

    Ok(RcFilterResult {
        cutoff_hz: cutoff.value(),
        time_constant_s: tau,
        display: cutoff.to_string(),
    })
}
