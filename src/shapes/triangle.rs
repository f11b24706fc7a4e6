//! Filled triangle in four row-pattern styles.

use std::fmt;
use std::str::FromStr;

use super::Shape;
use crate::validate::validate_positive;

/// Height used when construction input is rejected.
pub const DEFAULT_HEIGHT: i64 = 6;

// ─── TriangleKind ─────────────────────────────────────────────────────────────

/// The closed set of triangle drawing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangleKind {
    #[default]
    Right,
    Equilateral,
    Isosceles,
    Inverted,
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Right => "Right",
            Self::Equilateral => "Equilateral",
            Self::Isosceles => "Isosceles",
            Self::Inverted => "Inverted",
        };
        f.write_str(s)
    }
}

impl FromStr for TriangleKind {
    type Err = String;

    /// Parse a kind name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "right" => Ok(Self::Right),
            "equilateral" => Ok(Self::Equilateral),
            "isosceles" => Ok(Self::Isosceles),
            "inverted" => Ok(Self::Inverted),
            _ => Err(format!(
                "unknown triangle kind '{s}' (expected right, equilateral, isosceles, or inverted)"
            )),
        }
    }
}

// ─── Triangle ─────────────────────────────────────────────────────────────────

/// A triangle with a validated height and one of four drawing styles.
///
/// The display name is derived from the kind on demand ("Right Triangle",
/// "Inverted Triangle", ...), so it always reflects the current kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    height: i64,
    kind: TriangleKind,
}

impl Triangle {
    pub fn new(height: i64, kind: TriangleKind) -> Self {
        Self {
            height: validate_positive(height, DEFAULT_HEIGHT, "Height"),
            kind,
        }
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn kind(&self) -> TriangleKind {
        self.kind
    }

    /// Set the height. A non-positive value keeps the current height.
    pub fn set_height(&mut self, height: i64) {
        self.height = validate_positive(height, self.height, "Height");
    }

    /// Switch the drawing style. All kinds are valid, so this never fails.
    pub fn set_kind(&mut self, kind: TriangleKind) {
        self.kind = kind;
    }

    /// Row i has i stars, flush left.
    fn render_right(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for i in 1..=self.height {
            writeln!(out, "{}", "*".repeat(i as usize))?;
        }
        Ok(())
    }

    /// Centered pyramid: row i has h-i-1 leading spaces and 2i+1 stars.
    fn render_equilateral(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for i in 0..self.height {
            let spaces = (self.height - i - 1) as usize;
            let stars = (2 * i + 1) as usize;
            writeln!(out, "{}{}", " ".repeat(spaces), "*".repeat(stars))?;
        }
        Ok(())
    }

    /// Centered pyramid against a base of 2h-1, spaces by truncating
    /// division. Yields the same rows as the equilateral style for equal
    /// heights.
    fn render_isosceles(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let base_width = self.height * 2 - 1;
        for i in 0..self.height {
            let stars = 2 * i + 1;
            let spaces = (base_width - stars) / 2;
            writeln!(
                out,
                "{}{}",
                " ".repeat(spaces as usize),
                "*".repeat(stars as usize)
            )?;
        }
        Ok(())
    }

    /// Upside-down pyramid: rows run from i = h down to 1 with h-i leading
    /// spaces and 2i-1 stars.
    fn render_inverted(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for i in (1..=self.height).rev() {
            let spaces = (self.height - i) as usize;
            let stars = (2 * i - 1) as usize;
            writeln!(out, "{}{}", " ".repeat(spaces), "*".repeat(stars))?;
        }
        Ok(())
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, TriangleKind::default())
    }
}

impl Shape for Triangle {
    fn name(&self) -> String {
        format!("{} Triangle", self.kind)
    }

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "Drawing a Filled {} (height: {}):",
            self.name(),
            self.height
        )?;
        writeln!(out)?;
        match self.kind {
            TriangleKind::Right => self.render_right(out),
            TriangleKind::Equilateral => self.render_equilateral(out),
            TriangleKind::Isosceles => self.render_isosceles(out),
            TriangleKind::Inverted => self.render_inverted(out),
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
