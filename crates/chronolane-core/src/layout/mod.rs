//! Timeline layout engine.
//!
//! This module composes the layout pipeline:
//! - Interval normalization (floor clamping, ongoing resolution, annotations)
//! - Axis construction with gap compression
//! - Index-to-pixel mapping
//! - Greedy lane packing
//!
//! [`layout_timeline`] is a pure function of its inputs: no clock reads, no
//! caching, no hidden state. Calling it twice with the same arguments yields
//! structurally identical results.

mod axis;
mod lane;
mod pixel;

pub use axis::{build_axis, AxisPoint};
pub use lane::pack_lanes;
pub use pixel::{build_pixel_map, PixelMap, MIN_WIDTH_UNITS};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::month::{resolve_end_index, Month, MonthIndex};
use crate::record::TimelineRecord;

/// Layout configuration.
///
/// `floor_index` is the earliest month the timeline renders; older history is
/// clamped to it. `now_index` resolves ongoing records and is supplied by the
/// caller so the engine stays deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub floor_index: MonthIndex,
    pub now_index: MonthIndex,
    pub unit_px: f32,
    pub gap_width_px: f32,
    pub left_pad_px: f32,
    pub lane_height_px: f32,
    pub bottom_padding_px: f32,
    pub gap_threshold_months: i32,
    pub simplify_threshold_months: i32,
}

impl LayoutConfig {
    /// Config with the stock visual constants: 28px month unit, two-unit gap
    /// width, 1.25-unit left pad, 120px lanes.
    pub fn new(floor: Month, now: Month) -> Self {
        Self {
            floor_index: floor.index(),
            now_index: now.index(),
            unit_px: 28.0,
            gap_width_px: 56.0,
            left_pad_px: 35.0,
            lane_height_px: 120.0,
            bottom_padding_px: 104.0,
            gap_threshold_months: 12,
            simplify_threshold_months: 24,
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.unit_px > 0.0) {
            return Err(LayoutError::InvalidConfig {
                field: "unit_px",
                message: format!("must be positive, got {}", self.unit_px),
            });
        }
        if !(self.gap_width_px >= 0.0) {
            return Err(LayoutError::InvalidConfig {
                field: "gap_width_px",
                message: format!("must be non-negative, got {}", self.gap_width_px),
            });
        }
        if !(self.left_pad_px >= 0.0) {
            return Err(LayoutError::InvalidConfig {
                field: "left_pad_px",
                message: format!("must be non-negative, got {}", self.left_pad_px),
            });
        }
        if !(self.lane_height_px > 0.0) {
            return Err(LayoutError::InvalidConfig {
                field: "lane_height_px",
                message: format!("must be positive, got {}", self.lane_height_px),
            });
        }
        if !(self.bottom_padding_px >= 0.0) {
            return Err(LayoutError::InvalidConfig {
                field: "bottom_padding_px",
                message: format!("must be non-negative, got {}", self.bottom_padding_px),
            });
        }
        if self.gap_threshold_months < 1 {
            return Err(LayoutError::InvalidConfig {
                field: "gap_threshold_months",
                message: format!("must be at least 1, got {}", self.gap_threshold_months),
            });
        }
        if self.simplify_threshold_months < 0 {
            return Err(LayoutError::InvalidConfig {
                field: "simplify_threshold_months",
                message: format!(
                    "must be non-negative, got {}",
                    self.simplify_threshold_months
                ),
            });
        }
        Ok(())
    }
}

/// A record with its computed placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaidOutRecord {
    #[serde(flatten)]
    pub record: TimelineRecord,
    /// Start clamped to the floor
    pub start_index: MonthIndex,
    /// End resolved against "now" for ongoing records, never before the start
    pub end_index: MonthIndex,
    /// Display row; same-lane records never overlap
    pub lane: usize,
    /// Raw interval collapses to a single month
    pub is_single_month: bool,
    /// No end date was supplied
    pub is_ongoing: bool,
    /// Raw start predates the floor by at least the simplify threshold; the
    /// caller should render a truncation affordance instead of a bar
    pub is_simplified_start: bool,
}

impl LaidOutRecord {
    /// Rendered duration in months, inclusive.
    pub fn duration_months(&self) -> i32 {
        self.end_index - self.start_index + 1
    }
}

/// Complete layout for one set of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    pub axis_points: Vec<AxisPoint>,
    pub records: Vec<LaidOutRecord>,
    pub lane_count: usize,
    pub pixel_map: PixelMap,
    pub total_width_px: f32,
    pub total_height_px: f32,
}

impl LayoutResult {
    /// Earliest axis index (the floor), if the axis is non-empty.
    pub fn min_index(&self) -> Option<MonthIndex> {
        self.axis_points.first().map(|p| p.start_index())
    }

    /// Latest axis index, if the axis is non-empty.
    pub fn max_index(&self) -> Option<MonthIndex> {
        self.axis_points.last().map(|p| match p {
            AxisPoint::Month { index } => *index,
            AxisPoint::Gap { to_index, .. } => *to_index,
        })
    }
}

/// Normalize one record against the floor and "now".
fn normalize(record: &TimelineRecord, config: &LayoutConfig) -> LaidOutRecord {
    let raw_start = record.start.index();
    let raw_end = resolve_end_index(record.end.as_ref(), config.now_index).max(raw_start);

    let start_index = raw_start.max(config.floor_index);
    let end_index = raw_end.max(start_index);

    LaidOutRecord {
        record: record.clone(),
        start_index,
        end_index,
        lane: 0,
        is_single_month: raw_end - raw_start + 1 <= 1,
        is_ongoing: record.end.is_none(),
        is_simplified_start: raw_start < config.floor_index
            && config.floor_index - raw_start >= config.simplify_threshold_months,
    }
}

/// Lay out `records` on a month-granularity axis.
///
/// Pure and total over well-formed input: empty input yields an empty axis,
/// zero lanes, and a minimum-size canvas. Dense overlap or a huge span is
/// never an error, only a denser result.
pub fn layout_timeline(
    records: &[TimelineRecord],
    config: &LayoutConfig,
) -> Result<LayoutResult> {
    config.validate()?;

    let mut laid_out: Vec<LaidOutRecord> = records.iter().map(|r| normalize(r, config)).collect();

    let spans: Vec<(MonthIndex, MonthIndex)> = laid_out
        .iter()
        .map(|r| (r.start_index, r.end_index))
        .collect();

    let min_index = config.floor_index;
    let max_index = spans
        .iter()
        .map(|&(_, end)| end)
        .max()
        .unwrap_or(min_index);

    let axis_points = build_axis(&spans, min_index, max_index, config.gap_threshold_months);
    let pixel_map = build_pixel_map(
        &axis_points,
        config.unit_px,
        config.gap_width_px,
        config.left_pad_px,
    );

    let (lanes, lane_count) = pack_lanes(&spans);
    for (record, lane) in laid_out.iter_mut().zip(lanes) {
        record.lane = lane;
    }

    let total_width_px = pixel_map.total_width_px();
    let total_height_px =
        (lane_count as f32 + 1.0) * config.lane_height_px + config.bottom_padding_px;

    Ok(LayoutResult {
        axis_points,
        records: laid_out,
        lane_count,
        pixel_map,
        total_width_px,
        total_height_px,
    })
}
