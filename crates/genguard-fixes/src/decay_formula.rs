//! Exponential-decay sign convention.
//!
//! Discharge/decay quantities follow `exp(-t/tau)`. Two ordered
//! rewrites:
//!
//! 1. `1 - exp(<expr>)` → `exp(-<expr>)`
//! 2. `exp(t/<tau>)` (positive exponent) → `exp(-t/<tau>)`

use regex::Regex;
use std::sync::LazyLock;

static ONE_MINUS_EXP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"1\s*-\s*exp\(([^)]+)\)").unwrap());

static POSITIVE_EXPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"exp\(\s*t\s*/\s*([^)]+)\)").unwrap());

/// Rewrites decay formulas to the `exp(-t/tau)` form.
#[must_use]
pub fn apply(code: &str) -> String {
    let fixed = ONE_MINUS_EXP_RE.replace_all(code, "exp(-$1)");
    POSITIVE_EXPONENT_RE
        .replace_all(&fixed, "exp(-t/$1)")
        .into_owned()
}
