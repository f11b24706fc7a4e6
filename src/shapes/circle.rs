//! Filled circle, rasterized with a distance test.

use std::fmt;

use super::Shape;
use crate::validate::validate_positive;

/// Radius used when construction input is rejected.
pub const DEFAULT_RADIUS: i64 = 5;

/// A circle with a validated radius, drawn as a filled disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    radius: i64,
}

impl Circle {
    pub fn new(radius: i64) -> Self {
        Self {
            radius: validate_positive(radius, DEFAULT_RADIUS, "Radius"),
        }
    }

    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Set the radius. A non-positive value keeps the current radius.
    pub fn set_radius(&mut self, radius: i64) {
        self.radius = validate_positive(radius, self.radius, "Radius");
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl Shape for Circle {
    fn name(&self) -> String {
        "Circle".to_string()
    }

    /// Rasterize a filled disk over a (2r+1) × (2r+1) cell grid.
    ///
    /// A cell is filled when its distance from the center is within
    /// r + 0.5, so boundary cells round outward; at radius 1 this fills
    /// the whole 3×3 block. Rows keep their trailing spaces.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "Drawing a {} (radius: {}):", self.name(), self.radius)?;
        writeln!(out)?;

        let diameter = self.radius * 2;
        for y in 0..=diameter {
            for x in 0..=diameter {
                let dx = (x - self.radius) as f64;
                let dy = (y - self.radius) as f64;
                let distance = (dx * dx + dy * dy).sqrt();
                let cell = if distance <= self.radius as f64 + 0.5 {
                    '*'
                } else {
                    ' '
                };
                out.write_char(cell)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
