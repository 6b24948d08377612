//! # Self-Test Harness
//!
//! Runs every flat calculation against a known answer and reports one line
//! per check. Failures are recorded and the remaining checks still run;
//! nothing is propagated to the caller.
//!
//! A check passes when
//!
//! ```text
//! |computed - expected| <= TOLERANCE * max(1, |expected|)
//! ```
//!
//! Infinite expectations pass only on exact equality; NaN never passes.
//!
//! [`run_self_test`] writes to stdout and holds the stdout lock for the whole
//! report, so concurrent runs do not interleave lines.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::self_test::SelfTest;
//!
//! let report = SelfTest::standard().run();
//! assert!(report.all_passed());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{info, warn};

use crate::calculations::ohms_law::ohms_law;
use crate::calculations::parallel::{parallel_resistance, PARALLEL_INVALID};
use crate::calculations::rc_filter::rc_cutoff;
use crate::calculations::resistor::{resistor_value, RESISTOR_INVALID};
use crate::calculations::statistics::{stats_mean, stats_rms};
use crate::errors::{CalcError, CalcResult};

/// Relative-or-absolute comparison tolerance
pub const TOLERANCE: f64 = 1e-4;

const STATS_SAMPLES: [f32; 4] = [1.5, 2.5, 3.5, 4.5];

/// A single known-answer check.
#[derive(Debug, Clone)]
pub struct Check {
    pub name: String,
    pub expected: f64,
    compute: fn() -> f64,
}

impl Check {
    pub fn new(name: impl Into<String>, expected: f64, compute: fn() -> f64) -> Self {
        Self { name: name.into(), expected, compute }
    }

    fn evaluate(&self) -> CheckOutcome {
        let computed = (self.compute)();
        CheckOutcome {
            name: self.name.clone(),
            computed,
            expected: self.expected,
            passed: within_tolerance(computed, self.expected),
        }
    }
}

/// Whether `computed` matches `expected` under [`TOLERANCE`].
pub fn within_tolerance(computed: f64, expected: f64) -> bool {
    if computed.is_nan() || expected.is_nan() {
        return false;
    }
    if expected.is_infinite() || computed.is_infinite() {
        return computed == expected;
    }
    (computed - expected).abs() <= TOLERANCE * expected.abs().max(1.0)
}

/// Recorded result of one check.
///
/// `computed` and `expected` serialize non-finite values as the strings
/// `"inf"`, `"-inf"` and `"NaN"`; JSON numbers cannot hold them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub name: String,
    #[serde(with = "float_repr")]
    pub computed: f64,
    #[serde(with = "float_repr")]
    pub expected: f64,
    pub passed: bool,
}

mod float_repr {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.collect_str(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(v),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid float value: {other}"))),
            },
        }
    }
}

/// Full diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestReport {
    pub generated_at: DateTime<Utc>,
    pub tolerance: f64,
    pub checks: Vec<CheckOutcome>,
}

impl SelfTestReport {
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Write one line per check followed by a summary line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "--- Self-Test ({}) ---", self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        for check in &self.checks {
            writeln!(
                out,
                "{:<7}{}: computed {}, expected {}",
                status_icon(check.passed),
                check.name,
                fmt_value(check.computed),
                fmt_value(check.expected),
            )?;
        }
        writeln!(
            out,
            "Result: {}/{} passed{}",
            self.passed_count(),
            self.checks.len(),
            if self.all_passed() { "" } else { " - SYSTEM CHECK FAILED" }
        )
    }

    /// JSON form of the report
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::Internal {
            message: format!("Failed to serialize self-test report: {}", e),
        })
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn fmt_value(v: f64) -> String {
    if v.is_finite() {
        format!("{:.4}", v)
    } else {
        v.to_string()
    }
}

/// An ordered set of checks.
#[derive(Debug, Clone)]
pub struct SelfTest {
    checks: Vec<Check>,
}

impl SelfTest {
    /// Known-answer checks covering every calculation and sentinel policy.
    pub fn standard() -> Self {
        Self::with_checks(vec![
            Check::new("resistor_value(2, 2, 3)", 22_000.0, || resistor_value(2, 2, 3)),
            Check::new("resistor_value(4, 7, 2)", 4_700.0, || resistor_value(4, 7, 2)),
            Check::new("resistor_value(1, 0, 12) out of range", RESISTOR_INVALID, || {
                resistor_value(1, 0, 12)
            }),
            Check::new("ohms_law(V, I=2, R=10)", 20.0, || f64::from(ohms_law(1, 0.0, 2.0, 10.0))),
            Check::new("ohms_law(I, V=5, R=10)", 0.5, || f64::from(ohms_law(2, 5.0, 0.0, 10.0))),
            Check::new("ohms_law(R, V=10, I=2)", 5.0, || f64::from(ohms_law(3, 10.0, 2.0, 0.0))),
            Check::new("ohms_law(I, V=5, R=0)", f64::INFINITY, || {
                f64::from(ohms_law(2, 5.0, 0.0, 0.0))
            }),
            Check::new("ohms_law(mode 9)", 0.0, || f64::from(ohms_law(9, 1.0, 1.0, 1.0))),
            Check::new("rc_cutoff(1k, 1u)", 1.0 / (2.0 * std::f64::consts::PI * 1e-3), || {
                f64::from(rc_cutoff(1000.0, 1e-6))
            }),
            Check::new("rc_cutoff(0, 1u)", f64::INFINITY, || f64::from(rc_cutoff(0.0, 1e-6))),
            Check::new("stats_mean([1.5, 2.5, 3.5, 4.5])", 3.0, || f64::from(stats_mean(&STATS_SAMPLES))),
            Check::new("stats_rms([1.5, 2.5, 3.5, 4.5])", 10.25f64.sqrt(), || {
                f64::from(stats_rms(&STATS_SAMPLES))
            }),
            Check::new("stats_mean([])", 0.0, || f64::from(stats_mean(&[]))),
            Check::new("parallel_resistance([100, 100])", 50.0, || {
                f64::from(parallel_resistance(&[100.0, 100.0]))
            }),
            Check::new("parallel_resistance([100, -5])", f64::from(PARALLEL_INVALID), || {
                f64::from(parallel_resistance(&[100.0, -5.0]))
            }),
        ])
    }

    pub fn with_checks(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    /// Evaluate every check. Pure apart from the timestamp.
    pub fn run(&self) -> SelfTestReport {
        let checks: Vec<CheckOutcome> = self.checks.iter().map(Check::evaluate).collect();
        let report = SelfTestReport {
            generated_at: Utc::now(),
            tolerance: TOLERANCE,
            checks,
        };

        if report.all_passed() {
            info!(checks = report.checks.len(), "self-test passed");
        } else {
            warn!(
                failed = report.failed_count(),
                checks = report.checks.len(),
                "self-test reported failures"
            );
        }
        report
    }
}

/// Run the standard checks and write the report to `out`.
pub fn run_self_test_to<W: Write>(out: &mut W) -> io::Result<SelfTestReport> {
    let report = SelfTest::standard().run();
    report.write_to(out)?;
    Ok(report)
}

/// Run the standard checks and print the report to stdout.
///
/// Never fails: write errors are logged and dropped.
pub fn run_self_test() {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = run_self_test_to(&mut lock).and_then(|_| lock.flush()) {
        warn!(error = %e, "failed to write self-test report");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_checks_pass() {
        let report = SelfTest::standard().run();
        let failed: Vec<_> = report.checks.iter().filter(|c| !c.passed).collect();
        assert!(failed.is_empty(), "failed checks: {failed:?}");
    }

    #[test]
    fn test_one_line_per_check() {
        let mut buf = Vec::new();
        let report = run_self_test_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let check_lines = text.lines().filter(|l| l.starts_with("[OK]") || l.starts_with("[FAIL]")).count();
        assert_eq!(check_lines, report.checks.len());
        assert!(text.contains("resistor_value(2, 2, 3): computed 22000.0000, expected 22000.0000"));
        assert!(text.contains(&format!("Result: {0}/{0} passed", report.checks.len())));
    }

    #[test]
    fn test_failure_does_not_stop_run() {
        let suite = SelfTest::with_checks(vec![
            Check::new("deliberately wrong", 1.0, || 2.0),
            Check::new("nan never passes", 0.0, || f64::NAN),
            Check::new("still runs", 50.0, || f64::from(parallel_resistance(&[100.0, 100.0]))),
        ]);
        let report = suite.run();
        assert_eq!(report.checks.len(), 3);
        assert_eq!(report.failed_count(), 2);
        assert!(report.checks[2].passed);

        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("[FAIL] deliberately wrong"));
        assert!(text.contains("SYSTEM CHECK FAILED"));
    }

    #[test]
    fn test_tolerance() {
        assert!(within_tolerance(159.15495, 159.154_943));
        assert!(within_tolerance(1e-6, 0.0));
        assert!(!within_tolerance(1e-3, 0.0));
        assert!(within_tolerance(f64::INFINITY, f64::INFINITY));
        assert!(!within_tolerance(f64::NEG_INFINITY, f64::INFINITY));
        assert!(!within_tolerance(1e30, f64::INFINITY));
    }

    #[test]
    fn test_report_json_roundtrip() {
        let report = SelfTest::standard().run();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"expected\": \"inf\""));

        let parsed: SelfTestReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.generated_at, report.generated_at);
        assert_eq!(parsed.checks.len(), report.checks.len());
        for (got, want) in parsed.checks.iter().zip(&report.checks) {
            assert_eq!(got.name, want.name);
            assert_eq!(got.passed, want.passed);
            assert!(within_tolerance(got.computed, want.computed), "{}", got.name);
            assert!(within_tolerance(got.expected, want.expected), "{}", got.name);
        }
        assert_eq!(parsed.checks[6].expected, f64::INFINITY);
    }

    #[test]
    fn test_non_finite_outcome_json() {
        let outcome = CheckOutcome {
            name: "nan".to_string(),
            computed: f64::NAN,
            expected: f64::NEG_INFINITY,
            passed: false,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"name":"nan","computed":"NaN","expected":"-inf","passed":false}"#);

        let parsed: CheckOutcome = serde_json::from_str(&json).unwrap();
        assert!(parsed.computed.is_nan());
        assert_eq!(parsed.expected, f64::NEG_INFINITY);

        let bad = r#"{"name":"x","computed":"lots","expected":1.0,"passed":false}"#;
        assert!(serde_json::from_str::<CheckOutcome>(bad).is_err());
    }
}
