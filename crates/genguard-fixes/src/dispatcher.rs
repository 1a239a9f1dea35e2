//! Fix dispatch: maps an issue's fix directive to its strategy.

use genguard_core::{FixKind, Issue};

use crate::{
    ada_compliance, audit_header, decay_formula, esp32_adc, esp32_pwm, generic_replace,
    growth_formula, pid_dt, safety_timeout, step_response,
};

/// Applies the fix of every issue that carries one, in issue order.
///
/// Sequential and non-transactional: the output of one fix is the input of
/// the next. Issues without a fix directive are skipped. This function
/// never fails; individual strategies return their input unchanged when
/// their precondition does not hold.
#[must_use]
pub fn apply_fixes(code: &str, issues: &[Issue]) -> String {
    let mut fixed = code.to_string();
    for issue in issues {
        if let Some(fix) = issue.fix {
            fixed = apply_one(&fixed, fix, issue);
        }
    }
    fixed
}

fn apply_one(code: &str, fix: FixKind, issue: &Issue) -> String {
    match fix {
        FixKind::InjectSafetyTimeout => safety_timeout::apply(code),
        FixKind::Esp32PwmFix => esp32_pwm::apply(code),
        FixKind::Esp32AdcFix => esp32_adc::apply(code),
        FixKind::InjectAuditHeader => audit_header::apply(code),
        FixKind::FixAdaCompliance => ada_compliance::apply(code),
        FixKind::FixDecayFormula => decay_formula::apply(code),
        FixKind::FixGrowthFormula => growth_formula::apply(code),
        FixKind::FixStepResponse => step_response::apply(code),
        FixKind::FixPidDt => pid_dt::apply(code),
        FixKind::GenericRegexReplace => generic_replace::apply(
            code,
            issue.trigger_pattern.as_deref(),
            issue.replacement.as_deref(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genguard_core::Severity;

    fn issue_with_fix(fix: FixKind) -> Issue {
        Issue::new(None, Severity::Warning, "test").with_fix(fix)
    }

    #[test]
    fn skips_issues_without_fix() {
        let issues = vec![Issue::new(None, Severity::Error, "no fix here")];
        assert_eq!(apply_fixes("analogWrite(PIN, 1);", &issues), "analogWrite(PIN, 1);");
    }

    #[test]
    fn applies_fixes_sequentially() {
        let issues = vec![
            issue_with_fix(FixKind::Esp32PwmFix),
            issue_with_fix(FixKind::Esp32AdcFix),
        ];
        let fixed = apply_fixes("analogWrite(PIN, 1023);", &issues);
        assert_eq!(fixed, "ledcWrite(PIN, 4095);");
    }

    #[test]
    fn generic_fix_uses_issue_pattern_and_replacement() {
        let issues = vec![issue_with_fix(FixKind::GenericRegexReplace)
            .with_trigger_pattern(r"temp_\d+")
            .with_replacement("tempC")];
        assert_eq!(apply_fixes("temp_123 = read();", &issues), "tempC = read();");
    }

    #[test]
    fn generic_fix_without_pattern_is_noop() {
        let issues = vec![issue_with_fix(FixKind::GenericRegexReplace)];
        assert_eq!(apply_fixes("temp_123;", &issues), "temp_123;");
    }
}
