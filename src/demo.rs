//! Demo driver that draws a fixed sequence of shapes with section headers.

use std::fmt;

use crate::shapes::{Circle, Rectangle, Shape, Triangle, TriangleKind};

/// Run the complete demo, writing everything to `out`.
///
/// Draws a sample of every shape, a set of size and kind variations, and a
/// resize-and-redraw example, then a completion line.
pub fn run(out: &mut dyn fmt::Write) -> fmt::Result {
    draw_all_shapes(out)?;
    demonstrate_variations(out)?;
    demonstrate_resizing(out)?;
    writeln!(out, "All shapes drawn successfully!")
}

/// One of each shape, rendered through the common trait.
fn draw_all_shapes(out: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(out, "Starting to draw shapes:")?;
    writeln!(out, "========================")?;

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::default()),
        Box::new(Rectangle::new(8, 4)),
        Box::new(Triangle::new(6, TriangleKind::Right)),
    ];

    for shape in &shapes {
        shape.render(out)?;
        writeln!(out)?;
    }
    Ok(())
}

fn demonstrate_variations(out: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(out, "Different rectangle sizes:")?;
    writeln!(out, "=========================")?;

    let small_rect = Rectangle::new(4, 2);
    small_rect.render(out)?;
    writeln!(out)?;

    let large_rect = Rectangle::new(12, 6);
    large_rect.render(out)?;
    writeln!(out)?;

    writeln!(out, "Different triangle types:")?;
    writeln!(out, "========================")?;

    let equilateral = Triangle::new(5, TriangleKind::Equilateral);
    equilateral.render(out)?;
    writeln!(out)?;

    let inverted = Triangle::new(4, TriangleKind::Inverted);
    inverted.render(out)?;
    writeln!(out)?;

    let isosceles = Triangle::new(5, TriangleKind::Isosceles);
    isosceles.render(out)?;
    writeln!(out)
}

fn demonstrate_resizing(out: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(out, "Resizing examples:")?;
    writeln!(out, "=================")?;

    let mut dynamic_rect = Rectangle::new(5, 3);
    dynamic_rect.render(out)?;
    writeln!(out)?;

    writeln!(out, "After resizing:")?;
    dynamic_rect.render_with_size(8, 4, out)?;
    writeln!(out)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
