//! Region segmentation: multi-source flood fill over the raster.
//!
//! Scans every pixel; each unvisited pixel matching the target color
//! seeds a breadth-first flood fill that collects its entire
//! 8-connected matching component. Components below the configured
//! minimum size are discarded (their pixels stay visited, so they are
//! never re-grown). The whole pass is O(W·H): the visited grid caps
//! each pixel at one growth step plus constant neighbor checks.

use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

use crate::matcher::colors_match;
use crate::types::{FinderConfig, Point, Region};

/// Partition pixels matching `target` into maximal 8-connected regions.
///
/// Regions are returned in discovery order of a column-major scan
/// (x outer, y inner). Membership is independent of scan order; only
/// the ordering of the returned vector depends on it, which downstream
/// ties (see [`largest_region`](crate::recolor::largest_region)) rely on.
///
/// Returns an empty vector when no pixel matches or every matching
/// component is smaller than `config.min_region_size`.
#[must_use]
pub fn find_regions(image: &RgbaImage, target: Rgba<u8>, config: &FinderConfig) -> Vec<Region> {
    let (width, height) = image.dimensions();
    let mut visited = vec![false; width as usize * height as usize];
    let mut regions = Vec::new();

    for x in 0..width {
        for y in 0..height {
            if visited[grid_index(width, x, y)]
                || !colors_match(*image.get_pixel(x, y), target, config.max_color_diff)
            {
                continue;
            }

            let region = grow_region(
                image,
                target,
                config.max_color_diff,
                &mut visited,
                Point::new(x, y),
            );
            if region.len() >= config.min_region_size {
                regions.push(region);
            }
        }
    }

    regions
}

/// Collect the full 8-connected matching component containing `seed`.
///
/// Breadth-first traversal with an explicit worklist; no recursion, so
/// arbitrarily large components cannot overflow the stack. Neighbors
/// are enqueued whenever they match the target color — duplicates are
/// tolerated and filtered by the visited check at pop time.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grow_region(
    image: &RgbaImage,
    target: Rgba<u8>,
    tolerance: u8,
    visited: &mut [bool],
    seed: Point,
) -> Region {
    let (width, height) = image.dimensions();
    let mut points = Vec::new();
    let mut worklist = VecDeque::new();
    worklist.push_back(seed);

    while let Some(point) = worklist.pop_front() {
        let idx = grid_index(width, point.x, point.y);
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        points.push(point);

        // 8-neighborhood: the 3x3 block minus the center.
        for dx in -1_i64..=1 {
            for dy in -1_i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = i64::from(point.x) + dx;
                let ny = i64::from(point.y) + dy;
                if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                    continue;
                }
                let neighbor = Point::new(nx as u32, ny as u32);
                if colors_match(*image.get_pixel(neighbor.x, neighbor.y), target, tolerance) {
                    worklist.push_back(neighbor);
                }
            }
        }
    }

    Region::new(points)
}

/// Row-major index into the visited grid.
const fn grid_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}
