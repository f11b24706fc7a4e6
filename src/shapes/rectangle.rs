//! Filled rectangle with an explicit resize-and-redraw operation.

use std::fmt;

use super::Shape;
use crate::validate::validate_positive;

/// Width used when construction input is rejected.
pub const DEFAULT_WIDTH: i64 = 10;
/// Height used when construction input is rejected.
pub const DEFAULT_HEIGHT: i64 = 5;

/// A rectangle with validated dimensions, drawn as a solid block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    width: i64,
    height: i64,
}

impl Rectangle {
    /// Each dimension is validated independently against its own default.
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width: validate_positive(width, DEFAULT_WIDTH, "Width"),
            height: validate_positive(height, DEFAULT_HEIGHT, "Height"),
        }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Set the width. A non-positive value keeps the current width.
    pub fn set_width(&mut self, width: i64) {
        self.width = validate_positive(width, self.width, "Width");
    }

    /// Set the height. A non-positive value keeps the current height.
    pub fn set_height(&mut self, height: i64) {
        self.height = validate_positive(height, self.height, "Height");
    }

    /// Update both dimensions, then draw immediately.
    ///
    /// The dimensions are validated independently against the current
    /// values, so a rejected width does not block a valid height update.
    pub fn render_with_size(
        &mut self,
        new_width: i64,
        new_height: i64,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        self.width = validate_positive(new_width, self.width, "Width");
        self.height = validate_positive(new_height, self.height, "Height");
        self.render(out)
    }

    fn render_filled(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for _ in 0..self.height {
            writeln!(out, "{}", "*".repeat(self.width as usize))?;
        }
        Ok(())
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Shape for Rectangle {
    fn name(&self) -> String {
        "Rectangle".to_string()
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "Drawing a Filled {} ({}x{}):",
            self.name(),
            self.width,
            self.height
        )?;
        writeln!(out)?;
        self.render_filled(out)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
