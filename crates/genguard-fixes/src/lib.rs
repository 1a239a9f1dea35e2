//! # genguard-fixes
//!
//! Built-in auto-fix strategies for genguard.
//!
//! Each strategy is a stateless text transform `&str -> String`,
//! idempotent on text it has already fixed, and failing safe: a missing
//! precondition returns the input unchanged, never an error.
//!
//! ## Available Fixes
//!
//! | Identifier | Module | Behavior |
//! |------------|--------|----------|
//! | `inject_safety_timeout` | [`safety_timeout`] | Inject a failsafe timeout into setup/loop blocks |
//! | `esp32_pwm_fix` | [`esp32_pwm`] | `analogWrite` → `ledcWrite` |
//! | `esp32_adc_fix` | [`esp32_adc`] | 10-bit ADC constants → 12-bit |
//! | `inject_audit_header` | [`audit_header`] | `@audit_log` marker above def/class lines |
//! | `fix_ada_compliance` | [`ada_compliance`] | Raise sub-36 width assignments |
//! | `fix_decay_formula` | [`decay_formula`] | Decay sign convention `exp(-t/tau)` |
//! | `fix_growth_formula` | [`growth_formula`] | Wrap growth RHS in `(1 - ...)` |
//! | `fix_step_response` | [`step_response`] | Fix exponent sign in step response |
//! | `fix_pid_dt` | [`pid_dt`] | Append `* dt` to accumulator statements |
//! | `generic_regex_replace` | [`generic_replace`] | Learned find/replace pair from the issue |
//!
//! ## Usage
//!
//! ```ignore
//! use genguard_fixes::apply_fixes;
//!
//! let repaired = apply_fixes(code, report.issues.as_slice());
//! ```

#![forbid(unsafe_code)]

pub mod ada_compliance;
pub mod audit_header;
pub mod decay_formula;
mod dispatcher;
pub mod esp32_adc;
pub mod esp32_pwm;
pub mod generic_replace;
pub mod growth_formula;
pub mod pid_dt;
pub mod safety_timeout;
pub mod step_response;

pub use dispatcher::apply_fixes;

/// Re-export core types for convenience.
pub use genguard_core::{FixKind, Issue};
