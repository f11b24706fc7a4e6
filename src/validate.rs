//! Soft validation for shape dimensions.
//!
//! A rejected dimension is never an error: the caller gets a fallback value
//! back and a warning line goes to stdout.

/// Clamp a dimension to the positive range.
///
/// Returns `value` unchanged when it is at least 1. Otherwise prints a
/// warning to stdout and returns `fallback` instead. Constructors pass their
/// fixed default as the fallback; setters pass the current value, so an
/// invalid mutation leaves the state untouched.
pub fn validate_positive(value: i64, fallback: i64, label: &str) -> i64 {
    if value >= 1 {
        value
    } else {
        println!("{}", warning_line(label, fallback));
        fallback
    }
}

/// The diagnostic line emitted for a rejected dimension.
fn warning_line(label: &str, fallback: i64) -> String {
    format!("Warning: {label} must be positive. Using default value: {fallback}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
