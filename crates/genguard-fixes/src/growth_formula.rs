//! Exponential-growth sign convention.
//!
//! Charging/rising quantities follow `(1 - exp(-t/tau))`. Lines that
//! already carry `exp(-...)` but no `(1 - ...)` wrapper, and that read
//! like a growth quantity, get their right-hand side wrapped:
//!
//! ```text
//! charge = exp(-t/tau);   →   charge = (1 - exp(-t/tau));
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Words that mark a line as a growth quantity.
const GROWTH_WORDS: &[&str] = &["charge", "heat", "rise", "grow"];

static RHS_EXP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=\s*([^;]*?exp\([^)]+\))").unwrap());

/// Wraps growth right-hand sides in `(1 - ...)`.
#[must_use]
pub fn apply(code: &str) -> String {
    code.lines()
        .map(|line| {
            if line.contains("exp(-") && !line.contains("(1 -") {
                let lower = line.to_lowercase();
                if GROWTH_WORDS.iter().any(|w| lower.contains(w)) {
                    return RHS_EXP_RE.replace_all(line, "= (1 - $1)").into_owned();
                }
            }
            line.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_growth_rhs() {
        assert_eq!(
            apply("charge = exp(-t/tau);"),
            "charge = (1 - exp(-t/tau));"
        );
    }

    #[test]
    fn requires_growth_context_word() {
        let code = "decay = exp(-t/tau);";
        assert_eq!(apply(code), code);
    }

    #[test]
    fn skips_already_wrapped_lines() {
        let code = "heat_rise = (1 - exp(-t/tau));";
        assert_eq!(apply(code), code);
    }

    #[test]
    fn skips_positive_exponent_lines() {
        // Not this fix's concern; the decay fix owns sign errors.
        let code = "charge = exp(t/tau);";
        assert_eq!(apply(code), code);
    }

    #[test]
    fn only_touches_matching_lines() {
        let fixed = apply("rise = exp(-t/RC);\nother = exp(-t/RC);");
        assert_eq!(fixed, "rise = (1 - exp(-t/RC));\nother = exp(-t/RC);");
    }

    #[test]
    fn idempotent() {
        let once = apply("charge = exp(-t/tau);");
        assert_eq!(apply(&once), once);
    }
}
