//! huebrush-core: connected color region finding (sans-IO).
//!
//! Given an RGBA pixel buffer and a target color, partitions matching
//! pixels into maximal 8-connected regions via flood fill, discards
//! regions below a minimum size, selects the largest, and produces a
//! recolored copy with each surviving region painted a random color.
//!
//! This crate has **no I/O or UI dependencies** -- it operates on
//! in-memory buffers and returns structured data. Capture, display,
//! and file handling live in the surrounding shell (`huebrush-paint`).

pub mod decode;
pub mod matcher;
pub mod recolor;
pub mod segment;
pub mod types;

pub use decode::decode_rgba;
pub use matcher::colors_match;
pub use recolor::{largest_region, recolor_image, recolor_image_with};
pub use segment::find_regions;
pub use types::{FinderConfig, FinderError, Point, Region, Rgba, RgbaImage};

use rand::Rng;

/// Stateful region-finding session over a replaceable image.
///
/// Holds the current reference image and the region set from the most
/// recent [`find_regions`](Self::find_regions) call, the shape in which
/// a frame-driven caller consumes the core: set the frame, segment
/// against the active target color, then read the largest region and
/// the recolored view.
///
/// The region set never outlives its image: [`set_image`](Self::set_image)
/// discards stale regions, so selection and recoloring can never pair an
/// old segmentation with a new frame. Querying before segmenting is not
/// an error -- [`largest_region`](Self::largest_region) is simply absent
/// and [`recolor_image`](Self::recolor_image) returns an unmodified copy.
#[derive(Debug, Clone, Default)]
pub struct RegionFinder {
    image: Option<RgbaImage>,
    regions: Vec<Region>,
    config: FinderConfig,
}

impl RegionFinder {
    /// Create a finder with the default configuration and no image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with an explicit configuration.
    #[must_use]
    pub fn with_config(config: FinderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Replace the image to be segmented.
    ///
    /// Any regions from a previous pass are discarded; they described
    /// the old buffer.
    pub fn set_image(&mut self, image: RgbaImage) {
        self.image = Some(image);
        self.regions.clear();
    }

    /// The current reference image, if one has been set.
    #[must_use]
    pub const fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Segment the current image against `target`, replacing the
    /// region set.
    ///
    /// A no-op when no image has been set.
    pub fn find_regions(&mut self, target: Rgba<u8>) {
        if let Some(image) = &self.image {
            self.regions = segment::find_regions(image, target, &self.config);
        }
    }

    /// Regions from the most recent segmentation pass, in discovery
    /// order. Empty before the first [`find_regions`](Self::find_regions)
    /// call.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The largest current region, or `None` when the region set is
    /// empty (nothing matched, or segmentation has not run yet).
    #[must_use]
    pub fn largest_region(&self) -> Option<&Region> {
        recolor::largest_region(&self.regions)
    }

    /// Recolored copy of the current image, with each region painted a
    /// random color drawn from the thread-local generator.
    ///
    /// Returns `None` when no image has been set. With an empty region
    /// set the result is a verbatim copy of the input.
    #[must_use]
    pub fn recolor_image(&self) -> Option<RgbaImage> {
        self.image
            .as_ref()
            .map(|image| recolor::recolor_image(image, &self.regions))
    }

    /// Recolored copy using an injected generator, for deterministic
    /// output under a seeded RNG.
    ///
    /// See [`recolor_image`](Self::recolor_image).
    #[must_use]
    pub fn recolor_image_with<R: Rng>(&self, rng: &mut R) -> Option<RgbaImage> {
        self.image
            .as_ref()
            .map(|image| recolor::recolor_image_with(image, &self.regions, rng))
    }
}
