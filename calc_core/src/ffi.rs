//! # Flat C ABI
//!
//! `extern "C"` entry points with the symbol names and numeric widths the
//! existing GUI loads from the shared library (`ctypes` declarations):
//!
//! | Symbol              | Arguments                          | Returns  |
//! |---------------------|------------------------------------|----------|
//! | `api_resistor_calc` | `int, int, int`                    | `double` |
//! | `api_ohms_law`      | `int mode, float v, float i, float r` | `float` |
//! | `api_rc_cutoff`     | `float r, float c`                 | `float`  |
//! | `api_stats_mean`    | `const float*, int n`              | `float`  |
//! | `api_stats_rms`     | `const float*, int n`              | `float`  |
//! | `api_parallel_r`    | `const float*, int n`              | `float`  |
//! | `api_run_self_test` | -                                  | -        |
//!
//! Every entry point is total. A null pointer or `n <= 0` makes the
//! statistics functions return `0.0` and the parallel combiner return
//! `-1.0`. Buffers are only read for the duration of the call.

use std::os::raw::{c_double, c_float, c_int};

use crate::calculations::ohms_law::ohms_law;
use crate::calculations::parallel::{parallel_resistance, PARALLEL_INVALID};
use crate::calculations::rc_filter::rc_cutoff;
use crate::calculations::resistor::resistor_value;
use crate::calculations::statistics::{stats_mean, stats_rms};
use crate::self_test::run_self_test;

/// Borrow `n` floats from a caller buffer, `None` for null or `n <= 0`.
///
/// # Safety
///
/// When `data` is non-null and `n > 0`, it must point to `n` initialized,
/// properly aligned `f32` values that stay valid and unmodified for `'a`.
unsafe fn borrow_samples<'a>(data: *const c_float, n: c_int) -> Option<&'a [f32]> {
    if data.is_null() || n <= 0 {
        return None;
    }
    let len = usize::try_from(n).ok()?;
    // SAFETY: upheld by the caller per this function's contract.
    Some(unsafe { std::slice::from_raw_parts(data, len) })
}

#[no_mangle]
pub extern "C" fn api_resistor_calc(b1: c_int, b2: c_int, mult: c_int) -> c_double {
    resistor_value(b1, b2, mult)
}

#[no_mangle]
pub extern "C" fn api_ohms_law(mode: c_int, v: c_float, i: c_float, r: c_float) -> c_float {
    ohms_law(mode, v, i, r)
}

#[no_mangle]
pub extern "C" fn api_rc_cutoff(r: c_float, c: c_float) -> c_float {
    rc_cutoff(r, c)
}

/// # Safety
///
/// `data` must be null or point to at least `n` readable `float`s.
#[no_mangle]
pub unsafe extern "C" fn api_stats_mean(data: *const c_float, n: c_int) -> c_float {
    // SAFETY: forwarded caller contract.
    match unsafe { borrow_samples(data, n) } {
        Some(samples) => stats_mean(samples),
        None => 0.0,
    }
}

/// # Safety
///
/// `data` must be null or point to at least `n` readable `float`s.
#[no_mangle]
pub unsafe extern "C" fn api_stats_rms(data: *const c_float, n: c_int) -> c_float {
    // SAFETY: forwarded caller contract.
    match unsafe { borrow_samples(data, n) } {
        Some(samples) => stats_rms(samples),
        None => 0.0,
    }
}

/// # Safety
///
/// `data` must be null or point to at least `n` readable `float`s.
#[no_mangle]
pub unsafe extern "C" fn api_parallel_r(data: *const c_float, n: c_int) -> c_float {
    // SAFETY: forwarded caller contract.
    match unsafe { borrow_samples(data, n) } {
        Some(values) => parallel_resistance(values),
        None => PARALLEL_INVALID,
    }
}

/// Holds the stdout lock while the report is written.
#[no_mangle]
pub extern "C" fn api_run_self_test() {
    run_self_test();
}
