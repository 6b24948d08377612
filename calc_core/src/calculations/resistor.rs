//! # Resistor Colour-Code Decoder
//!
//! Decodes the first three bands of a 4-band resistor:
//!
//! ```text
//! R = (band1 * 10 + band2) * 10^multiplier
//! ```
//!
//! Band digits map to the standard colours (0 Black ... 9 White), see
//! [`ColorBand`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::resistor::{calculate, ResistorBands};
//!
//! // Red, Red, Orange
//! let bands = ResistorBands::new(2, 2, 3).unwrap();
//! let result = calculate(&bands);
//! assert_eq!(result.resistance_ohm, 22_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Returned by [`resistor_value`] when any band digit is outside 0-9.
pub const RESISTOR_INVALID: f64 = -1.0;

/// Resistor colour bands in digit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorBand {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
}

impl ColorBand {
    /// All colours, indexed by their digit
    pub const ALL: [ColorBand; 10] = [
        ColorBand::Black,
        ColorBand::Brown,
        ColorBand::Red,
        ColorBand::Orange,
        ColorBand::Yellow,
        ColorBand::Green,
        ColorBand::Blue,
        ColorBand::Violet,
        ColorBand::Grey,
        ColorBand::White,
    ];

    /// Colour for a digit, `None` outside 0-9
    pub fn from_digit(digit: i32) -> Option<Self> {
        usize::try_from(digit).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Digit value of this colour
    pub fn digit(self) -> u8 {
        self as u8
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            ColorBand::Black => "Black",
            ColorBand::Brown => "Brown",
            ColorBand::Red => "Red",
            ColorBand::Orange => "Orange",
            ColorBand::Yellow => "Yellow",
            ColorBand::Green => "Green",
            ColorBand::Blue => "Blue",
            ColorBand::Violet => "Violet",
            ColorBand::Grey => "Grey",
            ColorBand::White => "White",
        }
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorBand {
    type Err = CalcError;

    /// Accepts a digit ("2") or a colour name ("red", "Gray").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(digit) = trimmed.parse::<i32>() {
            return Self::from_digit(digit).ok_or_else(|| {
                CalcError::invalid_input("band", trimmed, "Band digit must be 0-9")
            });
        }

        let name = if trimmed.eq_ignore_ascii_case("gray") { "grey" } else { trimmed };
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CalcError::invalid_input("band", trimmed, "Unknown colour name"))
    }
}

/// Three decoded bands: two significant digits and a power-of-ten multiplier.
///
/// ## JSON Example
///
/// ```json
/// { "band1": 2, "band2": 2, "multiplier": 3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistorBands {
    pub band1: u8,
    pub band2: u8,
    pub multiplier: u8,
}

impl ResistorBands {
    /// Build from raw digits, rejecting anything outside 0-9.
    pub fn new(band1: i32, band2: i32, multiplier: i32) -> CalcResult<Self> {
        Ok(Self {
            band1: checked_digit("band1", band1)?,
            band2: checked_digit("band2", band2)?,
            multiplier: checked_digit("multiplier", multiplier)?,
        })
    }

    /// Build from colours
    pub fn from_colors(band1: ColorBand, band2: ColorBand, multiplier: ColorBand) -> Self {
        Self {
            band1: band1.digit(),
            band2: band2.digit(),
            multiplier: multiplier.digit(),
        }
    }

    /// Validate a deserialized value (digits may be out of range in JSON).
    pub fn validate(&self) -> CalcResult<()> {
        checked_digit("band1", i32::from(self.band1))?;
        checked_digit("band2", i32::from(self.band2))?;
        checked_digit("multiplier", i32::from(self.multiplier))?;
        Ok(())
    }

    /// Colour names of the three bands, in order
    pub fn colors(&self) -> [Option<ColorBand>; 3] {
        [
            ColorBand::from_digit(i32::from(self.band1)),
            ColorBand::from_digit(i32::from(self.band2)),
            ColorBand::from_digit(i32::from(self.multiplier)),
        ]
    }
}

fn checked_digit(field: &str, digit: i32) -> CalcResult<u8> {
    ColorBand::from_digit(digit)
        .map(ColorBand::digit)
        .ok_or_else(|| CalcError::invalid_input(field, digit.to_string(), "Band digit must be 0-9"))
}

/// Result of a decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResistorResult {
    /// Nominal resistance in ohms
    pub resistance_ohm: f64,

    /// Human-readable value with unit scaling (e.g. "22.00 kΩ")
    pub display: String,

    /// Band colours in order (e.g. "Red-Red-Orange")
    pub colors: String,
}

/// Decode three band digits into ohms.
///
/// Total over all inputs: any digit outside 0-9 yields [`RESISTOR_INVALID`].
pub fn resistor_value(band1: i32, band2: i32, multiplier: i32) -> f64 {
    let in_range = |d: i32| (0..=9).contains(&d);
    if !(in_range(band1) && in_range(band2) && in_range(multiplier)) {
        debug!(band1, band2, multiplier, "band digit out of range");
        return RESISTOR_INVALID;
    }

    f64::from(band1 * 10 + band2) * 10f64.powi(multiplier)
}

/// Decode validated bands.
pub fn calculate(bands: &ResistorBands) -> ResistorResult {
    let resistance_ohm = resistor_value(
        i32::from(bands.band1),
        i32::from(bands.band2),
        i32::from(bands.multiplier),
    );
    let colors = bands
        .colors()
        .into_iter()
        .map(|c| c.map_or("?", ColorBand::name))
        .collect::<Vec<_>>()
        .join("-");
    ResistorResult {
        resistance_ohm,
        display: format_resistance(resistance_ohm),
        colors,
    }
}

/// Format a resistance with M/k scaling; whole ohms below 1 kΩ.
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1_000_000.0 {
        format!("{:.2} MΩ", ohms / 1_000_000.0)
    } else if ohms >= 1_000.0 {
        format!("{:.2} kΩ", ohms / 1_000.0)
    } else {
        format!("{:.0} Ω", ohms)
    }
}
