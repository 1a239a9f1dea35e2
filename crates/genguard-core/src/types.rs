//! Core types for validation issues and results.

use serde::{Deserialize, Serialize};

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail validation.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that makes the validated text invalid.
    Error,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Warning
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl Severity {
    /// Parses a severity from its lowercase name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// The closed set of text-transform fix strategies an issue can request.
///
/// Rule sources refer to these by snake_case identifier (e.g.
/// `"esp32_pwm_fix"`). Identifiers outside this set are rejected at load
/// time with a warning, so the dispatcher never sees an unknown fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixKind {
    /// Inject a failsafe timeout guard into setup/loop blocks.
    InjectSafetyTimeout,
    /// Replace `analogWrite` with the ESP32 `ledcWrite` call.
    Esp32PwmFix,
    /// Remap 10-bit ADC constants to 12-bit (1023→4095, 1024→4096).
    Esp32AdcFix,
    /// Insert an `@audit_log` marker above function/class definitions.
    InjectAuditHeader,
    /// Raise sub-minimum accessibility width assignments to 36.
    FixAdaCompliance,
    /// Rewrite decay formulas to the `exp(-t/tau)` sign convention.
    FixDecayFormula,
    /// Wrap growth formulas in the `(1 - exp(-t/tau))` form.
    FixGrowthFormula,
    /// Fix the exponent sign inside step-response expressions.
    FixStepResponse,
    /// Append `* dt` to accumulator statements missing a timestep.
    FixPidDt,
    /// Apply a learned find/replace regex pair carried on the issue.
    GenericRegexReplace,
}

impl FixKind {
    /// Parses a fix identifier as used in rule sources.
    #[must_use]
    pub fn parse(identifier: &str) -> Option<Self> {
        match identifier {
            "inject_safety_timeout" => Some(Self::InjectSafetyTimeout),
            "esp32_pwm_fix" => Some(Self::Esp32PwmFix),
            "esp32_adc_fix" => Some(Self::Esp32AdcFix),
            "inject_audit_header" => Some(Self::InjectAuditHeader),
            "fix_ada_compliance" => Some(Self::FixAdaCompliance),
            "fix_decay_formula" => Some(Self::FixDecayFormula),
            "fix_growth_formula" => Some(Self::FixGrowthFormula),
            "fix_step_response" => Some(Self::FixStepResponse),
            "fix_pid_dt" => Some(Self::FixPidDt),
            "generic_regex_replace" => Some(Self::GenericRegexReplace),
            _ => None,
        }
    }

    /// Returns the snake_case identifier for this fix.
    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            Self::InjectSafetyTimeout => "inject_safety_timeout",
            Self::Esp32PwmFix => "esp32_pwm_fix",
            Self::Esp32AdcFix => "esp32_adc_fix",
            Self::InjectAuditHeader => "inject_audit_header",
            Self::FixAdaCompliance => "fix_ada_compliance",
            Self::FixDecayFormula => "fix_decay_formula",
            Self::FixGrowthFormula => "fix_growth_formula",
            Self::FixStepResponse => "fix_step_response",
            Self::FixPidDt => "fix_pid_dt",
            Self::GenericRegexReplace => "generic_regex_replace",
        }
    }
}

impl std::fmt::Display for FixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// A single rule violation found during validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Id of the rule that produced this issue, when the rule carries one.
    pub id: Option<String>,
    /// Severity of this issue.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// 1-based line in the original text, when a match location exists.
    pub line: Option<usize>,
    /// The literal or regex source text that matched, when one did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_pattern: Option<String>,
    /// Fix strategy the dispatcher should apply for this issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<FixKind>,
    /// Replacement text for [`FixKind::GenericRegexReplace`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl Issue {
    /// Creates a new issue with no location, fix, or matched pattern.
    #[must_use]
    pub fn new(id: Option<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            message: message.into(),
            line: None,
            trigger_pattern: None,
            fix: None,
            replacement: None,
        }
    }

    /// Sets the matched line.
    #[must_use]
    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    /// Sets the matched pattern text.
    #[must_use]
    pub fn with_trigger_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.trigger_pattern = Some(pattern.into());
        self
    }

    /// Sets the fix directive.
    #[must_use]
    pub fn with_fix(mut self, fix: FixKind) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Sets the replacement text.
    #[must_use]
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {} {}", self.severity, self.message),
            None => write!(f, "{} {}", self.severity, self.message),
        }?;
        if let Some(id) = &self.id {
            write!(f, " [{id}]")?;
        }
        Ok(())
    }
}

/// Result of validating one piece of generated text.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// All issues found, in rule-store order.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Creates a report from the collected issues.
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Returns true iff no issue has error severity.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Returns issues that carry a fix directive.
    pub fn fixable(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.fix.is_some())
    }

    /// Counts issues by severity as (errors, warnings, infos).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |s: Severity| self.issues.iter().filter(|i| i.severity == s).count();
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Formats the report as a human-readable multi-line summary.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for issue in &self.issues {
            let _ = writeln!(report, "{issue}");
        }
        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Found {errors} error(s), {warnings} warning(s), {infos} info(s)"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_issue(severity: Severity) -> Issue {
        Issue::new(Some("no-delay".to_string()), severity, "Forbidden pattern: delay(")
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_parse_round_trip() {
        assert_eq!(Severity::parse("error"), Some(Severity::Error));
        assert_eq!(Severity::parse("warning"), Some(Severity::Warning));
        assert_eq!(Severity::parse("info"), Some(Severity::Info));
        assert_eq!(Severity::parse("critical"), None);
    }

    #[test]
    fn fix_kind_parse_known_identifiers() {
        assert_eq!(
            FixKind::parse("inject_safety_timeout"),
            Some(FixKind::InjectSafetyTimeout)
        );
        assert_eq!(FixKind::parse("esp32_pwm_fix"), Some(FixKind::Esp32PwmFix));
        assert_eq!(
            FixKind::parse("generic_regex_replace"),
            Some(FixKind::GenericRegexReplace)
        );
        assert_eq!(FixKind::parse("reticulate_splines"), None);
    }

    #[test]
    fn fix_kind_identifier_round_trip() {
        for kind in [
            FixKind::InjectSafetyTimeout,
            FixKind::Esp32PwmFix,
            FixKind::Esp32AdcFix,
            FixKind::InjectAuditHeader,
            FixKind::FixAdaCompliance,
            FixKind::FixDecayFormula,
            FixKind::FixGrowthFormula,
            FixKind::FixStepResponse,
            FixKind::FixPidDt,
            FixKind::GenericRegexReplace,
        ] {
            assert_eq!(FixKind::parse(kind.identifier()), Some(kind));
        }
    }

    #[test]
    fn report_valid_without_errors() {
        let report = ValidationReport::new(vec![make_issue(Severity::Warning)]);
        assert!(report.is_valid());
    }

    #[test]
    fn report_invalid_with_error() {
        let report = ValidationReport::new(vec![
            make_issue(Severity::Warning),
            make_issue(Severity::Error),
        ]);
        assert!(!report.is_valid());
    }

    #[test]
    fn report_counts_by_severity() {
        let report = ValidationReport::new(vec![
            make_issue(Severity::Error),
            make_issue(Severity::Warning),
            make_issue(Severity::Warning),
            make_issue(Severity::Info),
        ]);
        assert_eq!(report.count_by_severity(), (1, 2, 1));
    }

    #[test]
    fn report_format_includes_counts() {
        let report = ValidationReport::new(vec![make_issue(Severity::Error)]);
        let formatted = report.format_report();
        assert!(formatted.contains("Forbidden pattern: delay("));
        assert!(formatted.contains("1 error(s), 0 warning(s), 0 info(s)"));
    }

    #[test]
    fn issue_display_includes_line_and_id() {
        let issue = make_issue(Severity::Error).with_line(Some(4));
        let display = format!("{issue}");
        assert!(display.contains("line 4"));
        assert!(display.contains("[no-delay]"));
    }
}
