//! Step-response sign fix.
//!
//! Rewrites `(1 - exp(t/<tau>))` to `(1 - exp(-t/<tau>))`: the wrapper
//! is right, the exponent sign is not.

use regex::Regex;
use std::sync::LazyLock;

static STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(1\s*-\s*exp\(\s*t\s*/\s*([^)]+)\)\)").unwrap());

/// Fixes the exponent sign inside step-response expressions.
#[must_use]
pub fn apply(code: &str) -> String {
    STEP_RE.replace_all(code, "(1 - exp(-t/$1))").into_owned()
}
