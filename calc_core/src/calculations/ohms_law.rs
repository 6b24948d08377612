//! # Ohm's Law Solver
//!
//! Solves `V = I * R` for whichever quantity is selected.
//!
//! The flat solver [`ohms_law`] takes its operands in fixed slot order
//! `(voltage, current, resistance)`; the slot belonging to the selected
//! quantity is never read, so callers pass a placeholder (usually `0`).
//!
//! ## Zero denominators
//!
//! [`ohms_law`] uses plain IEEE-754 single-precision division: a zero
//! resistance (solving for current) or zero current (solving for resistance)
//! gives `±inf`, and `0 / 0` gives `NaN`. [`calculate`] rejects the same
//! inputs with [`CalcError::DivisionByZero`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::ohms_law::{ohms_law, OhmsLawMode};
//!
//! // V = 2 A * 10 Ω
//! assert_eq!(ohms_law(OhmsLawMode::Voltage as i32, 0.0, 2.0, 10.0), 20.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Amps, Ohms, Volts};

/// Which quantity to solve for. Discriminants are the ABI mode codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum OhmsLawMode {
    /// V = I * R
    Voltage = 1,
    /// I = V / R
    Current = 2,
    /// R = V / I
    Resistance = 3,
}

impl OhmsLawMode {
    /// Mode for an ABI code, `None` for anything but 1, 2 or 3
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(OhmsLawMode::Voltage),
            2 => Some(OhmsLawMode::Current),
            3 => Some(OhmsLawMode::Resistance),
            _ => None,
        }
    }
}

impl TryFrom<i32> for OhmsLawMode {
    type Error = CalcError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| CalcError::invalid_input("mode", code.to_string(), "Mode must be 1, 2 or 3"))
    }
}

impl fmt::Display for OhmsLawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OhmsLawMode::Voltage => "Voltage",
            OhmsLawMode::Current => "Current",
            OhmsLawMode::Resistance => "Resistance",
        };
        f.write_str(name)
    }
}

/// Ohm's law request. The field for the solved quantity is ignored.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "Current", "voltage_v": 5.0, "current_a": 0.0, "resistance_ohm": 10.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhmsLawInput {
    pub mode: OhmsLawMode,

    /// Voltage in volts (ignored when solving for voltage)
    #[serde(default)]
    pub voltage_v: f64,

    /// Current in amperes (ignored when solving for current)
    #[serde(default)]
    pub current_a: f64,

    /// Resistance in ohms (ignored when solving for resistance)
    #[serde(default)]
    pub resistance_ohm: f64,
}

impl OhmsLawInput {
    /// Solve for voltage from current and resistance
    pub fn voltage(current_a: f64, resistance_ohm: f64) -> Self {
        Self { mode: OhmsLawMode::Voltage, voltage_v: 0.0, current_a, resistance_ohm }
    }

    /// Solve for current from voltage and resistance
    pub fn current(voltage_v: f64, resistance_ohm: f64) -> Self {
        Self { mode: OhmsLawMode::Current, voltage_v, current_a: 0.0, resistance_ohm }
    }

    /// Solve for resistance from voltage and current
    pub fn resistance(voltage_v: f64, current_a: f64) -> Self {
        Self { mode: OhmsLawMode::Resistance, voltage_v, current_a, resistance_ohm: 0.0 }
    }

    /// Reject non-finite operands and zero denominators for the selected mode.
    pub fn validate(&self) -> CalcResult<()> {
        let operands: [(&str, f64); 2] = match self.mode {
            OhmsLawMode::Voltage => [("current_a", self.current_a), ("resistance_ohm", self.resistance_ohm)],
            OhmsLawMode::Current => [("voltage_v", self.voltage_v), ("resistance_ohm", self.resistance_ohm)],
            OhmsLawMode::Resistance => [("voltage_v", self.voltage_v), ("current_a", self.current_a)],
        };
        for (field, value) in operands {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
            }
        }

        match self.mode {
            OhmsLawMode::Voltage => Ok(()),
            OhmsLawMode::Current if self.resistance_ohm == 0.0 => {
                Err(CalcError::division_by_zero("Resistance"))
            }
            OhmsLawMode::Resistance if self.current_a == 0.0 => {
                Err(CalcError::division_by_zero("Current"))
            }
            _ => Ok(()),
        }
    }
}

/// Solved quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhmsLawResult {
    pub mode: OhmsLawMode,

    /// Solved value in the unit of `mode`
    pub value: f64,

    /// Human-readable value with engineering prefix (e.g. "500.00 mA")
    pub display: String,
}

/// Flat solver with fixed slot order `(v, i, r)`.
///
/// Total over all inputs: unknown modes return `0.0`, zero denominators
/// follow IEEE-754 division.
pub fn ohms_law(mode: i32, v: f32, i: f32, r: f32) -> f32 {
    match OhmsLawMode::from_code(mode) {
        Some(OhmsLawMode::Voltage) => i * r,
        Some(OhmsLawMode::Current) => {
            if r == 0.0 {
                debug!(v, "solving current with zero resistance");
            }
            v / r
        }
        Some(OhmsLawMode::Resistance) => {
            if i == 0.0 {
                debug!(v, "solving resistance with zero current");
            }
            v / i
        }
        None => {
            debug!(mode, "unknown Ohm's law mode");
            0.0
        }
    }
}

/// Solve a validated request in double precision.
pub fn calculate(input: &OhmsLawInput) -> CalcResult<OhmsLawResult> {
    input.validate()?;

    let v = Volts(input.voltage_v);
    let i = Amps(input.current_a);
    let r = Ohms(input.resistance_ohm);

    let (value, display) = match input.mode {
        OhmsLawMode::Voltage => {
            let solved = i * r;
            (solved.value(), solved.to_string())
        }
        OhmsLawMode::Current => {
            let solved = v / r;
            (solved.value(), solved.to_string())
        }
        OhmsLawMode::Resistance => {
            let solved = v / i;
            (solved.value(), solved.to_string())
        }
    };

    Ok(OhmsLawResult {
        mode: input.mode,
        value,
        display,
    })
}
