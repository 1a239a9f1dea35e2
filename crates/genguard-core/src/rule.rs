//! The validation rule record.
//!
//! A rule is one record with optional fields; which checks run is decided
//! by field presence at evaluation time, not by a type per rule kind.

use regex::Regex;

use crate::types::{FixKind, Severity};

/// A regex pattern paired with its source text.
///
/// The pattern is compiled once at construction and reused for every
/// match call; the raw text is kept for issue reporting.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    raw: String,
    compiled: Regex,
}

impl RegexPattern {
    /// Compiles a new pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern fails to compile.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let compiled = Regex::new(pattern).map_err(|e| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            compiled,
        })
    }

    /// Tests whether the pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.is_match(text)
    }

    /// Returns the pattern source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for RegexPattern {}

/// Errors in rule construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    /// A regex field failed to compile.
    #[error("invalid regex pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// Why it failed to compile.
        reason: String,
    },
}

/// One validation rule.
///
/// List-valued fields use an empty `Vec` for "absent"; the evaluator treats
/// presence of each field as the switch for the corresponding check.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    /// Stable rule id, used for merge precedence and suppression.
    pub id: Option<String>,
    /// Severity of issues this rule emits.
    pub severity: Severity,
    /// Message override; when absent, a per-check default is generated.
    pub message: Option<String>,
    /// Platform gate: rule only runs when this is a case-insensitive
    /// substring of the validation context.
    pub platform: Option<String>,
    /// Trigger terms: when non-empty, at least one must appear in the
    /// cleaned code or (case-insensitively) the context.
    pub trigger: Vec<String>,
    /// Exclusion terms: any match in the cleaned code or context skips
    /// the rule entirely.
    pub exclude_context: Vec<String>,
    /// Literal substrings that must not appear in the cleaned code.
    pub forbidden: Vec<String>,
    /// Regex patterns that must not match the cleaned code.
    pub forbidden_regex: Vec<RegexPattern>,
    /// Literal substring that must appear in the cleaned code.
    pub required_pattern: Option<String>,
    /// Regex pattern that must match the cleaned code.
    pub required_regex: Option<RegexPattern>,
    /// Fix strategy attached to issues from this rule.
    pub fix: Option<FixKind>,
    /// Replacement text carried onto issues (for the generic regex fix).
    pub replacement: Option<String>,
    /// Literal substring that suppresses forbidden/implicit-trigger issues
    /// when present in the *original* (uncleaned) text.
    pub exception: Option<String>,
}

impl Rule {
    /// True when the rule defines no forbidden or required checks, so its
    /// trigger terms themselves are treated as violations when present
    /// in the code.
    #[must_use]
    pub fn is_implicit_trigger(&self) -> bool {
        self.forbidden.is_empty()
            && self.forbidden_regex.is_empty()
            && self.required_pattern.is_none()
            && self.required_regex.is_none()
            && !self.trigger.is_empty()
    }
}
