//! Greedy lane packing for overlapping intervals.
//!
//! Classic interval-graph lane assignment: records sorted by
//! `(start ascending, end descending)`, each taking the first lane whose
//! previous occupant ends strictly before it starts. Total over any
//! well-formed input; there is no failure path.

use crate::month::MonthIndex;

/// Assign a lane to every closed interval in `spans`.
///
/// Returns the lane per input position (original order preserved) and the
/// number of lanes opened. Intervals sharing a lane never overlap; the
/// longest-first tie-break among equal starts keeps the lane count minimal.
pub fn pack_lanes(spans: &[(MonthIndex, MonthIndex)]) -> (Vec<usize>, usize) {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by_key(|&i| (spans[i].0, std::cmp::Reverse(spans[i].1)));

    // last assigned end per open lane
    let mut lane_ends: Vec<MonthIndex> = Vec::new();
    let mut lanes = vec![0usize; spans.len()];

    for &i in &order {
        let (start, end) = spans[i];
        let mut lane = 0;
        while lane < lane_ends.len() && lane_ends[lane] >= start {
            lane += 1;
        }
        if lane == lane_ends.len() {
            lane_ends.push(end);
        } else {
            lane_ends[lane] = end;
        }
        lanes[i] = lane;
    }

    let count = lane_ends.len();
    (lanes, count)
}
