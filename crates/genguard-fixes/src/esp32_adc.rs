//! ESP32 ADC resolution remap.
//!
//! The ESP32 ADC is 12-bit where classic Arduino boards are 10-bit.
//! Remaps the 10-bit full-scale constants: `1023` → `4095`,
//! `1024` → `4096`.

/// Remaps 10-bit ADC constants to their 12-bit equivalents.
#[must_use]
pub fn apply(code: &str) -> String {
    code.replace("1023", "4095").replace("1024", "4096")
}
