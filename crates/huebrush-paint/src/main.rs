//! Recolor the connected color regions of an image and paint with the
//! largest one: the still-image equivalent of webcam color painting.
//! Pick a target color (or sample it from a pixel), and every
//! sufficiently large 8-connected patch of that color is repainted a
//! random color; the largest patch can additionally be written out as
//! a "painting" silhouette in a solid paint color.

use std::path::PathBuf;

use clap::Parser;
use huebrush_core::{FinderConfig, Region, RegionFinder, decode_rgba};
use image::{Rgba, RgbaImage};

/// Find all connected regions of a target color, write a recolored
/// copy of the image, and optionally paint the largest region onto a
/// blank canvas.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input image path.
    input: PathBuf,

    /// Target color as hex ("#rrggbb" or "rrggbb").
    #[arg(long, value_name = "HEX")]
    color: Option<String>,

    /// Sample the target color from the input pixel at "X,Y"
    /// (the mouse-pick workflow for still images).
    #[arg(long, value_name = "X,Y")]
    pick: Option<String>,

    /// Output path for the recolored image.
    #[arg(short, long, default_value = "recolored.png")]
    output: PathBuf,

    /// Also write the largest region, filled with the paint color on a
    /// transparent canvas, to this path.
    #[arg(long, value_name = "PATH")]
    painting: Option<PathBuf>,

    /// Paint color for `--painting`, as hex.
    #[arg(long, value_name = "HEX", default_value = "#0000ff")]
    paint_color: String,

    /// Per-channel color tolerance (0-255).
    #[arg(long, value_name = "N")]
    tolerance: Option<u8>,

    /// Minimum pixel count for a region to be kept.
    #[arg(long, value_name = "N")]
    min_region: Option<usize>,
}

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

/// Parse a "#rrggbb" or "rrggbb" hex string into an opaque color.
fn parse_hex_color(s: &str) -> Result<Rgba<u8>, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("color must be 6 hex digits ('#rrggbb'), got: '{s}'"));
    }

    let channel = |lo: usize| -> Result<u8, String> {
        let digits = hex.get(lo..lo + 2).unwrap_or_default();
        u8::from_str_radix(digits, 16).map_err(|e| format!("invalid hex digits '{digits}': {e}"))
    };

    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}

/// Parse `--pick "X,Y"` into pixel coordinates.
fn parse_pick(s: &str) -> Result<(u32, u32), String> {
    let (x_str, y_str) = s
        .split_once(',')
        .ok_or_else(|| format!("pick must be 'X,Y', got: '{s}'"))?;

    let x: u32 = x_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid pick X '{x_str}': {e}"))?;
    let y: u32 = y_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid pick Y '{y_str}': {e}"))?;

    Ok((x, y))
}

/// Resolve the target color from `--color` or `--pick`.
///
/// Exactly one of the two must be given; `--pick` samples the input
/// image and must lie within its bounds.
fn resolve_target(args: &Args, image: &RgbaImage) -> Result<Rgba<u8>, String> {
    match (&args.color, &args.pick) {
        (Some(hex), None) => parse_hex_color(hex).map_err(|e| format!("--color: {e}")),
        (None, Some(pick)) => {
            let (x, y) = parse_pick(pick).map_err(|e| format!("--pick: {e}"))?;
            let (width, height) = image.dimensions();
            if x >= width || y >= height {
                return Err(format!(
                    "--pick: ({x}, {y}) is outside the {width}x{height} image"
                ));
            }
            Ok(*image.get_pixel(x, y))
        }
        (Some(_), Some(_)) => Err("--color and --pick are mutually exclusive".to_string()),
        (None, None) => Err("a target color is required: pass --color or --pick".to_string()),
    }
}

/// Resolve the paint color when a painting was requested.
///
/// Parsed before any output is written, so a bad `--paint-color`
/// fails the run without leaving a partial result on disk. Returns
/// `None` when `--painting` was not given.
fn resolve_paint(args: &Args) -> Result<Option<Rgba<u8>>, String> {
    args.painting
        .as_ref()
        .map(|_| parse_hex_color(&args.paint_color).map_err(|e| format!("--paint-color: {e}")))
        .transpose()
}

// ---------------------------------------------------------------------------
// Painting
// ---------------------------------------------------------------------------

/// Fill the region's pixels with `paint` on a transparent canvas of the
/// image's dimensions.
fn paint_region(region: &Region, width: u32, height: u32, paint: Rgba<u8>) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for point in region.points() {
        canvas.put_pixel(point.x, point.y, paint);
    }
    canvas
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    eprintln!("Reading image from {}", args.input.display());
    let image_bytes = std::fs::read(&args.input)?;
    let image = decode_rgba(&image_bytes)?;
    let (width, height) = image.dimensions();

    let target = resolve_target(&args, &image)?;
    let paint = resolve_paint(&args)?;
    eprintln!(
        "Target color: #{:02x}{:02x}{:02x} ({width}x{height} image)",
        target.0[0], target.0[1], target.0[2],
    );

    let mut config = FinderConfig::default();
    if let Some(tolerance) = args.tolerance {
        config.max_color_diff = tolerance;
    }
    if let Some(min_region) = args.min_region {
        config.min_region_size = min_region;
    }

    let mut finder = RegionFinder::with_config(config);
    finder.set_image(image);
    finder.find_regions(target);

    match finder.largest_region() {
        Some(largest) => eprintln!(
            "Found {} region(s), largest: {} pixels",
            finder.regions().len(),
            largest.len(),
        ),
        None => eprintln!("No regions found"),
    }

    if let Some(recolored) = finder.recolor_image() {
        eprintln!("Saving recolored image to {}", args.output.display());
        recolored.save(&args.output)?;
    }

    if let Some((painting_path, paint)) = args.painting.as_ref().zip(paint) {
        let canvas = match finder.largest_region() {
            Some(largest) => paint_region(largest, width, height, paint),
            None => {
                eprintln!("Nothing to paint; writing an empty canvas");
                RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
            }
        };
        eprintln!("Saving painting to {}", painting_path.display());
        canvas.save(painting_path)?;
    }

    eprintln!("Done.");
    Ok(())
}
