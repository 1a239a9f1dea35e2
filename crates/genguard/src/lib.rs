//! # genguard
//!
//! Rule-based validation and auto-repair for machine-generated code.
//!
//! This is the main facade crate that re-exports the core engine and the
//! fix strategy library.
//!
//! ## Quick Start
//!
//! ```rust
//! use genguard::Validator;
//!
//! let domain = r#"{
//!   "domain": "embedded",
//!   "validation_rules": {
//!     "timing": [
//!       {
//!         "id": "no-blocking-delay",
//!         "severity": "error",
//!         "forbidden": "delay(",
//!         "message": "Blocking delay stalls the control loop"
//!       }
//!     ]
//!   }
//! }"#;
//!
//! let validator = Validator::builder()
//!     .domain_json(domain)
//!     .universal_rules(genguard::presets::universal_rules())
//!     .build();
//!
//! let report = validator.validate("analogWrite(PIN, 128);", "ESP32 fan controller");
//! assert!(!report.is_valid());
//!
//! let repaired = validator.auto_fix("analogWrite(PIN, 128);", &report.issues);
//! assert_eq!(repaired, "ledcWrite(PIN, 128);");
//! ```
//!
//! Validation never fails: malformed rule sources, bad regexes, and
//! unknown identifiers degrade with a warning instead of an error, so a
//! broken rule file can never block a generation pipeline.

#![forbid(unsafe_code)]

// Re-export the core engine types.
pub use genguard_core::*;

// Re-export the fix dispatcher; individual strategies stay behind the
// fixes crate for callers that want them directly.
pub use genguard_fixes::apply_fixes;

pub mod presets;

mod validator;

pub use validator::{Validator, ValidatorBuilder};
