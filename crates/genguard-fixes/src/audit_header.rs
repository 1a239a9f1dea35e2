//! Audit-log marker injection for regulated (pharma) code.
//!
//! Every function or class definition gets a matching-indent
//! `@audit_log` line directly above it:
//!
//! ```python
//! @audit_log
//! def dispense(dose):
//!     ...
//! ```

/// The marker line inserted above definitions.
pub const MARKER: &str = "@audit_log";

/// Inserts `@audit_log` above each `def`/`class` line that does not
/// already have one directly above it.
#[must_use]
pub fn apply(code: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for line in code.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("def ") || trimmed.starts_with("class ") {
            let already_marked = out.last().is_some_and(|prev| prev.contains(MARKER));
            if !already_marked {
                let indent = &line[..line.len() - trimmed.len()];
                out.push(format!("{indent}{MARKER}"));
            }
        }
        out.push(line.to_string());
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_top_level_def() {
        let fixed = apply("def dispense(dose):\n    pass");
        assert_eq!(fixed, "@audit_log\ndef dispense(dose):\n    pass");
    }

    #[test]
    fn marks_class_and_nested_def_with_indent() {
        let fixed = apply("class Batch:\n    def release(self):\n        pass");
        assert_eq!(
            fixed,
            "@audit_log\nclass Batch:\n    @audit_log\n    def release(self):\n        pass"
        );
    }

    #[test]
    fn skips_already_marked_definitions() {
        let code = "@audit_log\ndef dispense(dose):\n    pass";
        assert_eq!(apply(code), code);
    }

    #[test]
    fn idempotent() {
        let once = apply("def a():\n    pass\n\ndef b():\n    pass");
        assert_eq!(apply(&once), once);
    }

    #[test]
    fn leaves_non_definition_lines_alone() {
        let code = "x = 1\ny = defaults()";
        assert_eq!(apply(code), code);
    }
}
