//! Month-index to pixel-coordinate mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::axis::AxisPoint;
use crate::month::MonthIndex;

/// Minimum canvas width in month units, so an empty or tiny timeline still
/// renders a usable strip.
pub const MIN_WIDTH_UNITS: f32 = 6.0;

/// Lookup from month index to horizontal pixel coordinate.
///
/// Non-decreasing in the index; every index inside a compressed gap maps to
/// the same x, so bars touching a gap still resolve to a drawable position.
/// The locally-constant plateau inside a gap is intentional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelMap {
    xs: BTreeMap<MonthIndex, f32>,
    total_width_px: f32,
}

impl PixelMap {
    /// Pixel x for a month index, if it lies on the axis.
    pub fn x_for_index(&self, index: MonthIndex) -> Option<f32> {
        self.xs.get(&index).copied()
    }

    /// Total rendered width, including the minimum-width floor.
    pub fn total_width_px(&self) -> f32 {
        self.total_width_px
    }

    /// Number of mapped month indices.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Walk the axis left to right, accumulating an x cursor from `left_pad_px`.
///
/// A `Month` point claims the cursor and advances it by `unit_px`; a `Gap`
/// maps its whole range to the cursor and advances it once by `gap_width_px`
/// regardless of the gap's real duration.
pub fn build_pixel_map(
    points: &[AxisPoint],
    unit_px: f32,
    gap_width_px: f32,
    left_pad_px: f32,
) -> PixelMap {
    let mut xs = BTreeMap::new();
    let mut x = left_pad_px;

    for point in points {
        match point {
            AxisPoint::Month { index } => {
                xs.insert(*index, x);
                x += unit_px;
            }
            AxisPoint::Gap {
                from_index,
                to_index,
            } => {
                for index in *from_index..=*to_index {
                    xs.insert(index, x);
                }
                x += gap_width_px;
            }
        }
    }

    PixelMap {
        xs,
        total_width_px: (MIN_WIDTH_UNITS * unit_px).max(x),
    }
}
