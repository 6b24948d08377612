//! # Signal Statistics
//!
//! Arithmetic mean and root-mean-square over a borrowed sample slice.
//! Samples are summed in single precision, the same width the flat ABI
//! exposes. An empty slice yields `0.0` from both [`stats_mean`] and
//! [`stats_rms`]; [`calculate`] rejects it instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Arithmetic mean of `samples`, `0.0` when empty.
pub fn stats_mean(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        debug!("mean of empty sample set");
        return 0.0;
    }
    let sum: f32 = samples.iter().sum();
    sum / samples.len() as f32
}

/// Root-mean-square `sqrt(sum(x^2) / n)`, `0.0` when empty.
pub fn stats_rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        debug!("RMS of empty sample set");
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|x| x * x).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Sample set for the strict layer.
///
/// ## JSON Example
///
/// ```json
/// { "samples": [1.5, 2.5, 3.5, 4.5] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsInput {
    pub samples: Vec<f32>,
}

impl StatisticsInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.samples.is_empty() {
            return Err(CalcError::empty_input("samples"));
        }
        if let Some(pos) = self.samples.iter().position(|x| !x.is_finite()) {
            return Err(CalcError::invalid_input(
                format!("samples[{}]", pos),
                self.samples[pos].to_string(),
                "Sample must be a finite number",
            ));
        }
        Ok(())
    }
}

/// Mean and RMS of a sample set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub count: usize,
    pub mean: f32,
    pub rms: f32,
}

/// Compute mean and RMS of a non-empty, finite sample set.
pub fn calculate(input: &StatisticsInput) -> CalcResult<StatisticsResult> {
    input.validate()?;

    Ok(StatisticsResult {
        count: input.samples.len(),
        mean: stats_mean(&input.samples),
        rms: stats_rms(&input.samples),
    })
}
