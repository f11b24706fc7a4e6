//! Shape trait and the concrete shapes.

pub mod circle;
pub mod rectangle;
pub mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::{Triangle, TriangleKind};

use std::fmt;

/// Trait for drawable shapes.
///
/// A shape knows its display name and how to draw itself as ASCII art into
/// a text sink. Dimensions are validated at construction and mutation, so
/// rendering never has to handle degenerate sizes.
pub trait Shape {
    /// Human-readable display name (e.g. "Circle", "Equilateral Triangle").
    fn name(&self) -> String;

    /// Draw the shape into the given sink: a header line, a blank line,
    /// then the asterisk pattern, one row per line.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Draw the shape into a fresh String.
    fn render_to_string(&self) -> String {
        let mut out = String::new();
        // fmt::Write for String is infallible
        let _ = self.render(&mut out);
        out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
