//! Built-in universal baseline rules.
//!
//! Cross-domain rules merged into every domain's rule set unless the
//! domain suppresses them by id: failsafe timeouts, ESP32 peripheral
//! corrections, formula sign conventions, PID timestep scaling, and
//! regulated-industry compliance checks.
//!
//! The baseline is kept as an embedded JSON document in the standard
//! rule-source shape, so it exercises the same loader path as any
//! caller-supplied ruleset.

use tracing::warn;

use genguard_core::RuleMap;

/// The embedded universal ruleset document.
pub const UNIVERSAL_RULES_JSON: &str = r#"{
  "safety": [
    {
      "id": "failsafe-timeout",
      "severity": "error",
      "trigger": ["void loop"],
      "required_pattern": "SAFETY_TIMEOUT",
      "message": "Control loop has no failsafe timeout; actuators must stop when commands cease",
      "auto_fix": "inject_safety_timeout"
    }
  ],
  "embedded": [
    {
      "id": "esp32-ledc-pwm",
      "severity": "error",
      "platform": "ESP32",
      "forbidden": "analogWrite",
      "message": "ESP32 has no analogWrite; use the LEDC peripheral (ledcWrite)",
      "auto_fix": "esp32_pwm_fix"
    },
    {
      "id": "esp32-adc-range",
      "platform": "ESP32",
      "forbidden_regex": "\\b(1023|1024)\\b",
      "message": "ESP32 ADC is 12-bit; full scale is 4095, not 1023",
      "auto_fix": "esp32_adc_fix"
    }
  ],
  "formulas": [
    {
      "id": "decay-exponent-sign",
      "trigger": ["decay", "discharge", "cool"],
      "forbidden_regex": "exp\\(\\s*t\\s*/",
      "message": "Decay must follow exp(-t/tau); a positive exponent diverges",
      "auto_fix": "fix_decay_formula"
    },
    {
      "id": "step-response-sign",
      "forbidden_regex": "\\(1\\s*-\\s*exp\\(\\s*t\\s*/",
      "message": "Step response must follow (1 - exp(-t/tau))",
      "auto_fix": "fix_step_response"
    },
    {
      "id": "growth-needs-wrap",
      "trigger": ["charge", "heat", "rise", "grow"],
      "forbidden_regex": "=\\s*exp\\(-",
      "message": "Growth quantities must follow (1 - exp(-t/tau))",
      "auto_fix": "fix_growth_formula"
    }
  ],
  "control": [
    {
      "id": "pid-integral-dt",
      "trigger": ["integral +=", "error_sum +="],
      "required_pattern": "dt",
      "message": "Integral accumulators must scale by the timestep dt",
      "auto_fix": "fix_pid_dt"
    }
  ],
  "compliance": [
    {
      "id": "pharma-audit-log",
      "severity": "error",
      "platform": "pharma",
      "trigger": ["def ", "class "],
      "required_pattern": "@audit_log",
      "message": "Regulated code paths must carry @audit_log markers",
      "auto_fix": "inject_audit_header"
    },
    {
      "id": "ada-min-width",
      "severity": "error",
      "forbidden_regex": "(?i)(door|ramp|corridor|hallway|width)[a-z0-9_]*\\s*=\\s*([0-9]|[12][0-9]|3[0-5])\\b",
      "message": "Passage width below the 36 in ADA minimum",
      "auto_fix": "fix_ada_compliance"
    }
  ]
}"#;

/// Returns the universal baseline rules.
///
/// The embedded document is known-good; should it ever fail to load,
/// the baseline degrades to empty with a warning (fail-open).
#[must_use]
pub fn universal_rules() -> RuleMap {
    genguard_core::parse_ruleset(UNIVERSAL_RULES_JSON).unwrap_or_else(|e| {
        warn!(error = %e, "embedded universal ruleset failed to parse");
        RuleMap::new()
    })
}
