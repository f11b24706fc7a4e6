//! shape-ascii: geometric shapes rendered as ASCII art.
//!
//! Public API: the [`shapes::Shape`] trait with the concrete
//! [`shapes::Circle`], [`shapes::Rectangle`], and [`shapes::Triangle`]
//! shapes, plus [`render_demo()`] for the full demo sequence.

pub mod demo;
pub mod shapes;
pub mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Render the full shape demo to a String.
pub fn render_demo() -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible
    let _ = demo::run(&mut out);
    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
