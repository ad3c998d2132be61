//! Utility functions for analysis module
//!
//! Shared numeric helpers used across analysis routines.

/// Round `value` to `places` decimal places, halves away from zero.
pub fn round_to_decimals(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
