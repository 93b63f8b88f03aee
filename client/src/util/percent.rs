//! Shared value-to-proportional-width mapping for metric bars.

#[cfg(test)]
#[path = "percent_test.rs"]
mod percent_test;

/// Clamp a metric value to the `0..=100` range a bar track can show.
///
/// Values come from display records and are expected in range already; a
/// `u8` cannot go below zero, so only the upper bound needs enforcement.
pub fn clamp(value: u8) -> u8 {
    value.min(100)
}

/// Inline style setting a fill element's width to `value`% of its track.
pub fn fill_width(value: u8) -> String {
    format!("width:{}%", clamp(value))
}

/// Display label for a metric value, e.g. `82%`.
pub fn label(value: u8) -> String {
    format!("{}%", clamp(value))
}
