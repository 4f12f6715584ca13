//! Property tests for the layout engine.
//!
//! Exercises the engine's structural guarantees over generated record sets:
//! pixel monotonicity, same-lane disjointness, axis completeness, gap
//! compression thresholds, clamping, and determinism.

use proptest::prelude::*;

use chronolane_core::{
    layout_timeline, AxisPoint, LayoutConfig, Month, MonthIndex, TimelineRecord,
};

const FLOOR: Month = Month { year: 2018, month: 1 };
const NOW: Month = Month { year: 2024, month: 3 };

fn config() -> LayoutConfig {
    LayoutConfig::new(FLOOR, NOW)
}

/// Records starting up to ~12 years before the floor and lasting up to
/// ~6 years, some ongoing.
fn records_strategy() -> impl Strategy<Value = Vec<TimelineRecord>> {
    let floor_index = FLOOR.index();
    let record = (
        (floor_index - 150)..(floor_index + 70),
        0i32..75,
        any::<bool>(),
    )
        .prop_map(move |(start_index, duration, ongoing)| {
            let start = Month::from_index(start_index);
            let end = if ongoing {
                None
            } else {
                Some(Month::from_index(start_index + duration))
            };
            (start, end)
        });
    prop::collection::vec(record, 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (start, end))| TimelineRecord::new(format!("r{i}"), start, end))
            .collect()
    })
}

/// Expand an axis into the ordered list of indices it covers.
fn axis_indices(points: &[AxisPoint]) -> Vec<MonthIndex> {
    let mut out = Vec::new();
    for p in points {
        match p {
            AxisPoint::Month { index } => out.push(*index),
            AxisPoint::Gap {
                from_index,
                to_index,
            } => out.extend(*from_index..=*to_index),
        }
    }
    out
}

proptest! {
    #[test]
    fn pixel_map_is_monotonic(records in records_strategy()) {
        let result = layout_timeline(&records, &config()).unwrap();
        let indices = axis_indices(&result.axis_points);
        let mut prev = f32::MIN;
        for index in indices {
            let x = result.pixel_map.x_for_index(index).unwrap();
            prop_assert!(x >= prev, "x regressed at index {}", index);
            prev = x;
        }
    }

    #[test]
    fn same_lane_records_never_overlap(records in records_strategy()) {
        let result = layout_timeline(&records, &config()).unwrap();
        for (i, a) in result.records.iter().enumerate() {
            for b in result.records.iter().skip(i + 1) {
                if a.lane == b.lane {
                    let overlap =
                        a.start_index <= b.end_index && b.start_index <= a.end_index;
                    prop_assert!(
                        !overlap,
                        "records {} and {} overlap in lane {}",
                        a.record.id, b.record.id, a.lane
                    );
                }
            }
        }
        for r in &result.records {
            prop_assert!(r.lane < result.lane_count.max(1));
        }
    }

    #[test]
    fn axis_is_complete_and_duplicate_free(records in records_strategy()) {
        let result = layout_timeline(&records, &config()).unwrap();
        let indices = axis_indices(&result.axis_points);
        if records.is_empty() {
            prop_assert!(indices.is_empty());
        } else {
            let min = FLOOR.index();
            let max = result
                .records
                .iter()
                .map(|r| r.end_index)
                .max()
                .unwrap();
            prop_assert_eq!(indices, (min..=max).collect::<Vec<_>>());
        }
    }

    #[test]
    fn gaps_respect_threshold(records in records_strategy()) {
        let cfg = config();
        let result = layout_timeline(&records, &cfg).unwrap();
        for p in &result.axis_points {
            if let AxisPoint::Gap { from_index, to_index } = p {
                let run = to_index - from_index + 1;
                prop_assert!(run >= cfg.gap_threshold_months);
                // nothing may cover a compressed month
                for r in &result.records {
                    prop_assert!(
                        r.end_index < *from_index || r.start_index > *to_index,
                        "record {} covers compressed gap [{}, {}]",
                        r.record.id, from_index, to_index
                    );
                }
            }
        }
    }

    #[test]
    fn short_uncovered_runs_stay_as_months(records in records_strategy()) {
        let cfg = config();
        let result = layout_timeline(&records, &cfg).unwrap();
        // every maximal uncovered run appearing as Month points must be
        // shorter than the threshold
        let mut uncovered_run = 0;
        for p in &result.axis_points {
            match p {
                AxisPoint::Month { index } => {
                    let covered = result
                        .records
                        .iter()
                        .any(|r| r.start_index <= *index && *index <= r.end_index);
                    if covered {
                        prop_assert!(uncovered_run < cfg.gap_threshold_months);
                        uncovered_run = 0;
                    } else {
                        uncovered_run += 1;
                    }
                }
                AxisPoint::Gap { .. } => {
                    prop_assert_eq!(uncovered_run, 0);
                }
            }
        }
        prop_assert!(uncovered_run < cfg.gap_threshold_months);
    }

    #[test]
    fn layout_is_deterministic(records in records_strategy()) {
        let cfg = config();
        let a = layout_timeline(&records, &cfg).unwrap();
        let b = layout_timeline(&records, &cfg).unwrap();
        prop_assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn clamping_and_flags_hold(records in records_strategy()) {
        let cfg = config();
        let result = layout_timeline(&records, &cfg).unwrap();
        for (record, laid_out) in records.iter().zip(&result.records) {
            prop_assert!(laid_out.start_index >= cfg.floor_index);
            prop_assert!(laid_out.end_index >= laid_out.start_index);
            prop_assert_eq!(laid_out.is_ongoing, record.end.is_none());

            let raw_start = record.start.index();
            if raw_start >= cfg.floor_index {
                prop_assert_eq!(laid_out.start_index, raw_start);
                prop_assert!(!laid_out.is_simplified_start);
            } else {
                prop_assert_eq!(laid_out.start_index, cfg.floor_index);
                prop_assert_eq!(
                    laid_out.is_simplified_start,
                    cfg.floor_index - raw_start >= cfg.simplify_threshold_months
                );
            }
            if laid_out.is_ongoing {
                prop_assert!(laid_out.end_index <= cfg.now_index.max(laid_out.start_index));
            }
        }
    }

    #[test]
    fn canvas_dimensions_are_consistent(records in records_strategy()) {
        let cfg = config();
        let result = layout_timeline(&records, &cfg).unwrap();
        prop_assert!(result.total_width_px >= 6.0 * cfg.unit_px);
        prop_assert_eq!(result.total_width_px, result.pixel_map.total_width_px());
        prop_assert_eq!(
            result.total_height_px,
            (result.lane_count as f32 + 1.0) * cfg.lane_height_px + cfg.bottom_padding_px
        );
    }
}
