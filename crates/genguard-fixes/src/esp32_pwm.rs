//! ESP32 PWM call rewrite.
//!
//! The ESP32 Arduino core has no `analogWrite`; PWM goes through the
//! LEDC peripheral. Rewrites every `analogWrite` call name to
//! `ledcWrite`.

const GENERIC_CALL: &str = "analogWrite";
const ESP32_CALL: &str = "ledcWrite";

/// Replaces all `analogWrite` occurrences with `ledcWrite`.
#[must_use]
pub fn apply(code: &str) -> String {
    code.replace(GENERIC_CALL, ESP32_CALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_pwm_call() {
        assert_eq!(apply("analogWrite(PIN, 128);"), "ledcWrite(PIN, 128);");
    }

    #[test]
    fn rewrites_all_occurrences() {
        let fixed = apply("analogWrite(A, 1);\nanalogWrite(B, 2);");
        assert_eq!(fixed, "ledcWrite(A, 1);\nledcWrite(B, 2);");
    }

    #[test]
    fn idempotent() {
        let once = apply("analogWrite(PIN, 128);");
        assert_eq!(apply(&once), once);
    }
}
