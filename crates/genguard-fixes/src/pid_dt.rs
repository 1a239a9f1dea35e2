//! PID timestep fix.
//!
//! Integral accumulators must scale by the timestep. Lines that
//! accumulate without any `dt` get `* dt` appended before the statement
//! terminator (or at end of line if there is none):
//!
//! ```text
//! integral += error;   →   integral += error * dt;
//! ```

/// Accumulator statements this fix watches for.
const ACCUMULATORS: &[&str] = &["integral +=", "error_sum +="];

/// Appends `* dt` to accumulator statements missing a timestep.
#[must_use]
pub fn apply(code: &str) -> String {
    code.lines()
        .map(|line| {
            if ACCUMULATORS.iter().any(|a| line.contains(a)) && !line.contains("dt") {
                if line.contains(';') {
                    line.replacen(';', " * dt;", 1)
                } else {
                    format!("{line} * dt")
                }
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
