//! Rule evaluation over near-raw text.
//!
//! Gating and forbidden/required matching run against the comment-stripped
//! text; `exception` lookups and line-number resolution run against the
//! original text. The asymmetry is deliberate and load-bearing: an
//! exception string that only occurs inside a comment still suppresses
//! its rule, exactly as callers of the original engine expect.

use crate::comments::strip_comments;
use crate::rule::{RegexPattern, Rule};
use crate::store::RuleSet;
use crate::types::Issue;

/// Evaluates every rule in the set against `code`, in category order then
/// rule order, and returns the accumulated issues.
///
/// `context` is a free-text platform/use-case description; platform,
/// exclusion, and trigger gates match it case-insensitively. Issues are
/// never deduplicated across rules.
#[must_use]
pub fn evaluate(rules: &RuleSet, code: &str, context: &str) -> Vec<Issue> {
    let clean = strip_comments(code);
    let context_lower = context.to_lowercase();

    let mut issues = Vec::new();
    for (_category, category_rules) in rules.iter() {
        for rule in category_rules {
            check_rule(rule, code, &clean, &context_lower, &mut issues);
        }
    }
    issues
}

fn check_rule(rule: &Rule, code: &str, clean: &str, context_lower: &str, issues: &mut Vec<Issue>) {
    // Platform gate.
    if let Some(platform) = &rule.platform {
        if !context_lower.contains(&platform.to_lowercase()) {
            return;
        }
    }

    // Exclusion gate.
    if rule
        .exclude_context
        .iter()
        .any(|term| clean.contains(term.as_str()) || context_lower.contains(&term.to_lowercase()))
    {
        return;
    }

    // Trigger gate: with triggers present, at least one must hit.
    if !rule.trigger.is_empty()
        && !rule
            .trigger
            .iter()
            .any(|t| clean.contains(t.as_str()) || context_lower.contains(&t.to_lowercase()))
    {
        return;
    }

    for pattern in &rule.forbidden {
        if clean.contains(pattern.as_str()) {
            if exception_present(rule, code) {
                continue;
            }
            issues.push(issue_for(
                rule,
                format!("Forbidden pattern: {pattern}"),
                find_line(code, pattern),
                Some(pattern.as_str()),
            ));
        }
    }

    for pattern in &rule.forbidden_regex {
        if pattern.is_match(clean) {
            issues.push(issue_for(
                rule,
                format!("Forbidden pattern (regex): {}", pattern.as_str()),
                find_line_regex(code, pattern),
                Some(pattern.as_str()),
            ));
        }
    }

    if let Some(pattern) = &rule.required_pattern {
        if !clean.contains(pattern.as_str()) {
            issues.push(issue_for(
                rule,
                format!("Missing required pattern: {pattern}"),
                None,
                None,
            ));
        }
    }

    if let Some(pattern) = &rule.required_regex {
        if !pattern.is_match(clean) {
            issues.push(issue_for(
                rule,
                format!("Missing required pattern (regex): {}", pattern.as_str()),
                None,
                None,
            ));
        }
    }

    // Implicit trigger violation: with no forbidden/required checks, the
    // trigger terms themselves are the violation. Context hits do not
    // count here; the term must be in the code.
    if rule.is_implicit_trigger() {
        for term in &rule.trigger {
            if clean.contains(term.as_str()) {
                if exception_present(rule, code) {
                    continue;
                }
                issues.push(issue_for(
                    rule,
                    format!("Issue detected: {term}"),
                    find_line(code, term),
                    Some(term.as_str()),
                ));
            }
        }
    }
}

/// Exception lookup runs against the original text, comments included.
fn exception_present(rule: &Rule, code: &str) -> bool {
    rule.exception
        .as_deref()
        .is_some_and(|exception| code.contains(exception))
}

fn issue_for(rule: &Rule, default_message: String, line: Option<usize>, pattern: Option<&str>) -> Issue {
    let message = rule.message.clone().unwrap_or(default_message);
    let mut issue = Issue::new(rule.id.clone(), rule.severity, message).with_line(line);
    if let Some(pattern) = pattern {
        issue = issue.with_trigger_pattern(pattern);
    }
    if let Some(fix) = rule.fix {
        issue = issue.with_fix(fix);
    }
    if let Some(replacement) = &rule.replacement {
        issue = issue.with_replacement(replacement);
    }
    issue
}

/// First 1-based line of the original text containing `substring`.
fn find_line(code: &str, substring: &str) -> Option<usize> {
    code.lines()
        .position(|line| line.contains(substring))
        .map(|index| index + 1)
}

/// First 1-based line of the original text matching `pattern`.
fn find_line_regex(code: &str, pattern: &RegexPattern) -> Option<usize> {
    code.lines()
        .position(|line| pattern.is_match(line))
        .map(|index| index + 1)
}
