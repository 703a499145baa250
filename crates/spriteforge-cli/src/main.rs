use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use spriteforge_export::{ExportOptions, export_canvas, export_shape, read_png};
use spriteforge_raster::coords::Vec2;
use spriteforge_raster::logging::{LoggingConfig, init_logging};
use spriteforge_raster::paint::{Brush, Color};
use spriteforge_raster::shape::{CircleShape, PolygonShape, RoundedRectShape, Shape, TriangleShape};

#[derive(Parser)]
#[command(name = "spriteforge", version, about = "Rasterize simple shapes and export them as PNG sprites")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a rectangle with optionally rounded corners.
    Rect {
        width: u32,
        height: u32,
        /// Corner radius in pixels, clamped to half the shorter side.
        #[arg(long, default_value_t = 0.0)]
        corner_radius: f32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Export an isosceles triangle (apex centered over the base).
    Triangle {
        base: u32,
        height: u32,
        /// Rotation in degrees about the canvas center.
        #[arg(long, default_value_t = 0.0)]
        rotation: f32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Export a filled polygon from an ordered vertex list.
    Polygon {
        /// Vertex as `x,y`; repeat at least three times.
        #[arg(long = "point", value_parser = parse_point, required = true)]
        points: Vec<Vec2>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Export a filled circle.
    Circle {
        /// Center as `x,y`.
        #[arg(long, value_parser = parse_point)]
        center: Vec2,
        radius: f32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Re-process an existing PNG through the canvas transforms.
    Transform {
        /// Source PNG path.
        input: PathBuf,
        /// Resample to `WIDTHxHEIGHT` (nearest neighbor).
        #[arg(long, value_parser = parse_size)]
        resize: Option<(u32, u32)>,
        /// Rotate content by this many degrees about the buffer center.
        #[arg(long)]
        rotate: Option<f32>,
        /// Mirror columns left-to-right.
        #[arg(long)]
        flip: bool,
        /// Channel-wise tint as `#RRGGBB` or `#RRGGBBAA` hex.
        #[arg(long, value_parser = parse_color)]
        tint: Option<Color>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Destination PNG path.
    out: PathBuf,
    /// Fill color as `#RRGGBB` or `#RRGGBBAA` hex.
    #[arg(long, default_value = "#ffffff", value_parser = parse_color)]
    color: Color,
    /// Crop the output to its non-transparent content.
    #[arg(long)]
    crop: bool,
    /// Integer nearest-neighbor upscale factor.
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

impl OutputArgs {
    fn export_options(&self) -> ExportOptions {
        ExportOptions { crop: self.crop, scale: self.scale }
    }

    fn brush(&self) -> Brush {
        Brush::solid(self.color)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    let cli = Cli::parse();

    match cli.command {
        Command::Rect { width, height, corner_radius, output } => {
            let shape = Shape::RoundedRect(RoundedRectShape::uniform(width, height, corner_radius));
            run_export(&shape, &output)
        }
        Command::Triangle { base, height, rotation, output } => {
            let shape = Shape::Triangle(TriangleShape::new(base, height, rotation));
            run_export(&shape, &output)
        }
        Command::Polygon { points, output } => {
            let shape = Shape::Polygon(PolygonShape::new(points));
            run_export(&shape, &output)
        }
        Command::Circle { center, radius, output } => {
            let shape = Shape::Circle(CircleShape::new(center, radius));
            run_export(&shape, &output)
        }
        Command::Transform { input, resize, rotate, flip, tint, output } => {
            let mut canvas =
                read_png(&input).with_context(|| format!("reading {}", input.display()))?;
            if let Some((w, h)) = resize {
                canvas = canvas.resized(w, h);
            }
            if let Some(degrees) = rotate {
                canvas = canvas.rotated(degrees);
            }
            if flip {
                canvas = canvas.flipped_horizontal();
            }
            if let Some(color) = tint {
                canvas = canvas.tinted(color);
            }
            export_canvas(&canvas, output.export_options(), &output.out)
                .with_context(|| format!("writing {}", output.out.display()))
        }
    }
}

fn run_export(shape: &Shape, output: &OutputArgs) -> anyhow::Result<()> {
    if shape.is_degenerate() {
        log::warn!("shape is degenerate; exporting an empty sprite");
    }
    export_shape(shape, output.brush(), output.export_options(), &output.out)
        .with_context(|| format!("writing {}", output.out.display()))
}

/// Parses `x,y` into a point.
fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f32 = x.trim().parse().map_err(|_| format!("bad x coordinate `{x}`"))?;
    let y: f32 = y.trim().parse().map_err(|_| format!("bad y coordinate `{y}`"))?;
    Ok(Vec2::new(x, y))
}

/// Parses `WIDTHxHEIGHT` into dimensions.
fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected `WIDTHxHEIGHT`, got `{s}`"))?;
    let w: u32 = w.trim().parse().map_err(|_| format!("bad width `{w}`"))?;
    let h: u32 = h.trim().parse().map_err(|_| format!("bad height `{h}`"))?;
    Ok((w, h))
}

/// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional) into a color.
fn parse_color(s: &str) -> Result<Color, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return Err(format!("expected 6 or 8 hex digits, got `{s}`"));
    }

    let byte = |i: usize| -> Result<u8, String> {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("bad hex digits in `{s}`"))
    };

    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok(Color::from_rgba8([r, g, b, a]))
}
