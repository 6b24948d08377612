//! # Unit Types
//!
//! Type-safe wrappers for the SI quantities the toolkit works with. They are
//! plain `f64` newtypes so JSON stays clean (just numbers), and they carry
//! the Ohm's-law relations as operator impls:
//!
//! - `Amps * Ohms = Volts`
//! - `Volts / Ohms = Amps`
//! - `Volts / Amps = Ohms`
//!
//! `Display` renders with an engineering prefix (p, n, µ, m, k, M, G).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Amps, Ohms, Volts};
//!
//! let v: Volts = Amps(2.0) * Ohms(10.0);
//! assert_eq!(v.0, 20.0);
//! assert_eq!(Ohms(22_000.0).to_string(), "22.00 kΩ");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Resistance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

/// Potential difference in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amps(pub f64);

/// Capacitance in farads
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Farads(pub f64);

/// Frequency in hertz
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hertz(pub f64);

// ============================================================================
// Ohm's law relations
// ============================================================================

impl Mul<Ohms> for Amps {
    type Output = Volts;
    fn mul(self, rhs: Ohms) -> Volts {
        Volts(self.0 * rhs.0)
    }
}

impl Div<Ohms> for Volts {
    type Output = Amps;
    fn div(self, rhs: Ohms) -> Amps {
        Amps(self.0 / rhs.0)
    }
}

impl Div<Amps> for Volts {
    type Output = Ohms;
    fn div(self, rhs: Amps) -> Ohms {
        Ohms(self.0 / rhs.0)
    }
}

// ============================================================================
// Formatting
// ============================================================================

const PREFIXES: [(f64, &str); 8] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
    (1e-12, "p"),
];

/// Format a value with an engineering prefix and two decimals.
///
/// Zero and non-finite values are printed without a prefix.
pub fn format_si(value: f64, unit: &str) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{:.2} {}", value, unit);
    }

    let magnitude = value.abs();
    let mut index = PREFIXES
        .iter()
        .position(|(scale, _)| magnitude >= *scale)
        .unwrap_or(PREFIXES.len() - 1);
    // 999.996 rounds to "1000.00" at two decimals; move to the next prefix
    if index > 0 && (magnitude / PREFIXES[index].0 * 100.0).round() >= 100_000.0 {
        index -= 1;
    }
    let (scale, prefix) = PREFIXES[index];

    format!("{:.2} {}{}", value / scale, prefix, unit)
}

macro_rules! impl_quantity {
    ($type:ty, $unit:expr) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&format_si(self.0, $unit))
            }
        }

        impl $type {
            /// Unit symbol used by `Display`
            pub const SYMBOL: &'static str = $unit;

            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_quantity!(Ohms, "Ω");
impl_quantity!(Volts, "V");
impl_quantity!(Amps, "A");
impl_quantity!(Farads, "F");
impl_quantity!(Hertz, "Hz");
