//! Accent color validation and normalization.
//!
//! The backend contract requires a strict six-digit `#RRGGBB` color.
//! Validation never fails an operation: values that miss the pattern are
//! replaced with the fixed default before they reach the transport.

use std::sync::LazyLock;

use regex::Regex;

/// Fallback accent color substituted for any invalid candidate.
pub const DEFAULT_PRIMARY_COLOR: &str = "#1976d2";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"));

/// Whether `value` is a strict six-digit `#RRGGBB` color.
#[must_use]
pub fn is_valid_primary_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Normalize a candidate color, substituting the default for invalid input.
///
/// Valid colors are preserved unchanged, including their letter case.
#[must_use]
pub fn normalize_primary_color(value: &str) -> String {
    if is_valid_primary_color(value) {
        value.to_string()
    } else {
        DEFAULT_PRIMARY_COLOR.to_string()
    }
}
