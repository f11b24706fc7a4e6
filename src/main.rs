//! shape-ascii CLI entry point.
//!
//! With no subcommand the full demo runs; the subcommands draw a single
//! shape with the given dimensions.

use std::fs;
use std::io::{self, Write};

use clap::{Parser, Subcommand};

use shape_ascii::shapes::{Circle, Rectangle, Shape, Triangle, TriangleKind};

/// Geometric shapes as ASCII art on the console.
#[derive(Parser, Debug)]
#[command(
    name = "shape-ascii",
    about = "Geometric shapes as ASCII art on the console"
)]
struct Cli {
    /// Draw a single shape instead of running the full demo
    #[command(subcommand)]
    shape: Option<ShapeCommand>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output", global = true)]
    output: Option<String>,
}

#[derive(Subcommand, Debug)]
enum ShapeCommand {
    /// Draw a filled circle
    Circle {
        /// Radius in character cells
        #[arg(short = 'r', long = "radius", default_value_t = 5)]
        radius: i64,
    },
    /// Draw a filled rectangle
    Rect {
        /// Width in character cells
        #[arg(short = 'w', long = "width", default_value_t = 10)]
        width: i64,
        /// Height in character cells
        #[arg(short = 'H', long = "height", default_value_t = 5)]
        height: i64,
    },
    /// Draw a filled triangle
    Triangle {
        /// Height in character cells
        #[arg(short = 'H', long = "height", default_value_t = 6)]
        height: i64,
        /// Drawing style: right, equilateral, isosceles, or inverted
        #[arg(short = 'k', long = "kind", default_value = "right")]
        kind: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Failures are reported on stdout and the process still exits normally.
    if let Err(message) = run(&cli) {
        println!("Error occurred: {message}");
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let rendered = match &cli.shape {
        None => shape_ascii::render_demo(),
        Some(ShapeCommand::Circle { radius }) => Circle::new(*radius).render_to_string(),
        Some(ShapeCommand::Rect { width, height }) => {
            Rectangle::new(*width, *height).render_to_string()
        }
        Some(ShapeCommand::Triangle { height, kind }) => {
            let kind: TriangleKind = kind.parse()?;
            Triangle::new(*height, kind).render_to_string()
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        fs::write(path, rendered).map_err(|e| format!("cannot write '{path}': {e}"))
    } else {
        print!("{rendered}");
        io::stdout()
            .flush()
            .map_err(|e| format!("cannot flush stdout: {e}"))
    }
}
