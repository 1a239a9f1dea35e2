//! Generic find/replace fix for learned rules.
//!
//! The pattern and replacement travel on the issue itself
//! (`trigger_pattern` / `replacement`), since learned rules are
//! synthesized at runtime and have no dedicated strategy. The
//! replacement may use `$1`-style capture references.

use regex::Regex;
use tracing::warn;

/// Applies `pattern` as a find-regex with `replacement` across the text.
///
/// No-op when either part is missing or the pattern does not compile;
/// learned rules must never be able to break the fix pipeline.
#[must_use]
pub fn apply(code: &str, pattern: Option<&str>, replacement: Option<&str>) -> String {
    let (Some(pattern), Some(replacement)) = (pattern, replacement) else {
        return code.to_string();
    };

    match Regex::new(pattern) {
        Ok(re) => re.replace_all(code, replacement).into_owned(),
        Err(e) => {
            warn!(pattern, error = %e, "learned pattern does not compile, skipping fix");
            code.to_string()
        }
    }
}
