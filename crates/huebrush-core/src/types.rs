//! Shared types for the huebrush region finder.

use serde::{Deserialize, Serialize};

/// Re-export `Rgba` so downstream crates can name pixel colors without
/// depending on `image` directly.
pub use image::Rgba;

/// Re-export `RgbaImage` so downstream crates can reference the pixel
/// buffers the finder consumes and produces without depending on
/// `image` directly.
pub use image::RgbaImage;

/// Default per-channel color tolerance used by [`FinderConfig`].
pub const DEFAULT_MAX_COLOR_DIFF: u8 = 20;

/// Default minimum pixel count for a region to be kept.
pub const DEFAULT_MIN_REGION_SIZE: usize = 50;

/// A pixel coordinate in image space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: u32,
    /// Vertical position (pixels from top edge).
    pub y: u32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A connected set of pixels all matching one target color.
///
/// Points are stored in discovery order. A region is only ever produced
/// by segmentation, which guarantees 8-connectivity, disjointness from
/// other regions of the same pass, and a size of at least the configured
/// minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region(Vec<Point>);

impl Region {
    /// Create a new region from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the region has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of pixels in the region.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the region and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// Configuration for region finding.
///
/// All parameters have defaults matching the classic webcam-painting
/// behavior: a per-channel tolerance of 20 and a minimum region size
/// of 50 pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Maximum per-channel difference for two colors to match.
    ///
    /// Applied independently to red, green, and blue; alpha is ignored.
    pub max_color_diff: u8,

    /// Minimum number of pixels a connected component needs to be kept
    /// as a region. Smaller components are discarded after traversal.
    pub min_region_size: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_color_diff: DEFAULT_MAX_COLOR_DIFF,
            min_region_size: DEFAULT_MIN_REGION_SIZE,
        }
    }
}

/// Errors that can occur while preparing input for the finder.
///
/// Region finding itself is infallible: out-of-bounds neighbors are
/// excluded by bounds checks, and "no regions found" is an ordinary
/// empty result. Only the decode boundary can fail.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- Point tests ---

    #[test]
    fn point_new() {
        let p = Point::new(3, 4);
        assert_eq!(p.x, 3);
        assert_eq!(p.y, 4);
    }

    #[test]
    fn point_equality() {
        assert_eq!(Point::new(1, 2), Point::new(1, 2));
        assert_ne!(Point::new(1, 2), Point::new(1, 3));
    }

    #[test]
    fn point_copy() {
        let p = Point::new(1, 2);
        let p2 = p; // Copy
        assert_eq!(p, p2);
    }

    // --- Region tests ---

    #[test]
    fn region_new_and_len() {
        let r = Region::new(vec![Point::new(0, 0), Point::new(1, 1)]);
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
    }

    #[test]
    fn region_empty() {
        let r = Region::new(vec![]);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn region_points_returns_all() {
        let points = vec![Point::new(0, 0), Point::new(1, 1)];
        let r = Region::new(points.clone());
        assert_eq!(r.points(), &points);
    }

    #[test]
    fn region_into_points_returns_owned_vec() {
        let points = vec![Point::new(0, 0), Point::new(1, 1)];
        let r = Region::new(points.clone());
        assert_eq!(r.into_points(), points);
    }

    // --- FinderConfig tests ---

    #[test]
    fn finder_config_defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.max_color_diff, 20);
        assert_eq!(config.min_region_size, 50);
    }

    // --- FinderError tests ---

    #[test]
    fn error_empty_input_display() {
        let err = FinderError::EmptyInput;
        assert_eq!(err.to_string(), "input image data is empty");
    }

    // --- Serde round-trip tests ---

    #[test]
    fn point_serde_round_trip() {
        let p = Point::new(17, 31);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn region_serde_round_trip() {
        let r = Region::new(vec![Point::new(0, 0), Point::new(1, 2), Point::new(2, 2)]);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn finder_config_serde_round_trip() {
        let config = FinderConfig {
            max_color_diff: 35,
            min_region_size: 10,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: FinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
