//! Best-effort comment stripping.
//!
//! Matching in the evaluator runs against the stripped text so that a
//! forbidden pattern mentioned in a comment does not trip a rule. This is
//! a lexical pass, not a lexer: string literals containing `//`, `/*`, or
//! `#` get partially stripped too, and `#` also removes C preprocessor
//! lines. Downstream gating depends on exactly this behavior, so the
//! limitation is kept as-is rather than fixed.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").unwrap());

static LINE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").unwrap());

static HASH_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#.*").unwrap());

/// Removes `/* ... */`, `//...`, and `#...` comment spans.
#[must_use]
pub fn strip_comments(code: &str) -> String {
    let stripped = BLOCK_COMMENT_RE.replace_all(code, "");
    let stripped = LINE_COMMENT_RE.replace_all(&stripped, "");
    HASH_COMMENT_RE.replace_all(&stripped, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_block_comments() {
        let code = "int a = 1; /* delay(1000); */ int b = 2;";
        let clean = strip_comments(code);
        assert!(!clean.contains("delay("));
        assert!(clean.contains("int a = 1;"));
        assert!(clean.contains("int b = 2;"));
    }

    #[test]
    fn strips_multiline_block_comments() {
        let code = "before\n/* line one\nline two */\nafter";
        let clean = strip_comments(code);
        assert!(!clean.contains("line one"));
        assert!(clean.contains("before"));
        assert!(clean.contains("after"));
    }

    #[test]
    fn strips_line_comments_to_end_of_line() {
        let code = "digitalWrite(LED, HIGH); // delay(1000);\nmillis();";
        let clean = strip_comments(code);
        assert!(!clean.contains("delay("));
        assert!(clean.contains("millis();"));
    }

    #[test]
    fn strips_hash_comments() {
        let code = "x = 1  # delay(1000)\ny = 2";
        let clean = strip_comments(code);
        assert!(!clean.contains("delay("));
        assert!(clean.contains("y = 2"));
    }

    #[test]
    fn hash_stripping_also_eats_preprocessor_lines() {
        // Known lexical limitation, deliberately preserved.
        let clean = strip_comments("#include <Arduino.h>\nloop();");
        assert!(!clean.contains("include"));
        assert!(clean.contains("loop();"));
    }

    #[test]
    fn leaves_plain_code_untouched() {
        let code = "void loop() {\n  millis();\n}";
        assert_eq!(strip_comments(code), code);
    }
}
