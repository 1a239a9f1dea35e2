//! Failsafe timeout injection for embedded control sketches.
//!
//! Inserts a last-command timestamp and timeout constant ahead of the
//! setup block, and a failsafe check at the top of the loop block:
//!
//! ```c
//! unsigned long lastCommand = 0;
//! const long SAFETY_TIMEOUT = 500;
//!
//! void setup() { ... }
//!
//! void loop() {
//!   if (millis() - lastCommand > SAFETY_TIMEOUT) {
//!     // Failsafe triggered
//!   }
//!   ...
//! }
//! ```

/// Presence of this marker means the guard is already installed.
pub const MARKER: &str = "SAFETY_TIMEOUT";

const SETUP_ANCHOR: &str = "void setup";
const LOOP_ANCHOR: &str = "void loop() {";

const GLOBALS: &str = "unsigned long lastCommand = 0;\nconst long SAFETY_TIMEOUT = 500;\n\nvoid setup";

const LOOP_GUARD: &str =
    "\n  if (millis() - lastCommand > SAFETY_TIMEOUT) {\n    // Failsafe triggered\n  }\n";

/// Injects the safety-timeout guard.
///
/// No-op when the marker is already present or neither anchor exists.
#[must_use]
pub fn apply(code: &str) -> String {
    if code.contains(MARKER) {
        return code.to_string();
    }

    let mut fixed = code.to_string();
    if fixed.contains(SETUP_ANCHOR) {
        fixed = fixed.replacen(SETUP_ANCHOR, GLOBALS, 1);
    }
    if fixed.contains(LOOP_ANCHOR) {
        fixed = fixed.replacen(LOOP_ANCHOR, &format!("{LOOP_ANCHOR}{LOOP_GUARD}"), 1);
    }
    fixed
}
