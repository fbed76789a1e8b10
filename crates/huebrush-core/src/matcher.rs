//! Color matching: per-channel tolerance predicate.
//!
//! Two colors match when every one of their red, green, and blue
//! channel differences is within a fixed tolerance. Alpha never
//! participates.
//!
//! This is a box test in RGB space, not a perceptual color-distance
//! metric; colors a human would call "different" can still match if
//! each channel is individually close. That approximation is a known
//! limitation of the classic webcam-painting behavior this crate
//! reproduces, not something to correct here.

use image::Rgba;

/// Returns `true` iff `a` and `b` differ by at most `tolerance` on
/// every RGB channel.
///
/// Symmetric: `colors_match(a, b, t) == colors_match(b, a, t)`.
#[must_use]
pub fn colors_match(a: Rgba<u8>, b: Rgba<u8>, tolerance: u8) -> bool {
    a.0[0].abs_diff(b.0[0]) <= tolerance
        && a.0[1].abs_diff(b.0[1]) <= tolerance
        && a.0[2].abs_diff(b.0[2]) <= tolerance
}
