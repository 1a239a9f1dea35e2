//! ADA minimum-width enforcement.
//!
//! Assignments of an integer below 36 to a variable whose name mentions
//! a passage-width concept are raised to the 36-inch minimum, with the
//! original value recorded inline:
//!
//! ```text
//! door_width = 30   →   door_width = 36; // Auto-fixed for ADA (was 30)
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// ADA minimum clear width, in inches.
pub const MIN_WIDTH: u64 = 36;

/// Variable-name fragments that mark a width assignment.
const WIDTH_KEYWORDS: &[&str] = &["door", "ramp", "corridor", "hallway", "width"];

static ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_]+)\s*=\s*(\d+)").unwrap());

/// Raises sub-minimum width assignments to [`MIN_WIDTH`].
#[must_use]
pub fn apply(code: &str) -> String {
    ASSIGNMENT_RE
        .replace_all(code, |caps: &regex::Captures<'_>| {
            let variable = &caps[1];
            let lower = variable.to_lowercase();
            if !WIDTH_KEYWORDS.iter().any(|k| lower.contains(k)) {
                return caps[0].to_string();
            }
            match caps[2].parse::<u64>() {
                Ok(value) if value < MIN_WIDTH => {
                    format!("{variable} = {MIN_WIDTH}; // Auto-fixed for ADA (was {value})")
                }
                // Compliant value, or an integer too large to parse.
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}
