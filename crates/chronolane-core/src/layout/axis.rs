//! Axis construction with gap compression.
//!
//! The axis is the ordered sequence of points the rendering layer draws
//! gridlines and labels from. Long runs of months covered by no record are
//! collapsed into a single fixed-width gap marker so idle years do not eat
//! horizontal space.

use serde::{Deserialize, Serialize};

use crate::month::MonthIndex;

/// One point on the rendered axis.
///
/// The ordered sequence of points exactly spans `[min_index, max_index]`:
/// every index appears either as its own `Month` point or inside exactly one
/// `Gap` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AxisPoint {
    /// A single visible calendar month
    Month { index: MonthIndex },
    /// A compressed run of uncovered months, owning the closed range
    /// `[from_index, to_index]`
    Gap {
        from_index: MonthIndex,
        to_index: MonthIndex,
    },
}

impl AxisPoint {
    /// First month index this point covers.
    pub fn start_index(&self) -> MonthIndex {
        match self {
            Self::Month { index } => *index,
            Self::Gap { from_index, .. } => *from_index,
        }
    }

    /// Number of calendar months this point covers.
    pub fn months(&self) -> i32 {
        match self {
            Self::Month { .. } => 1,
            Self::Gap {
                from_index,
                to_index,
            } => to_index - from_index + 1,
        }
    }
}

/// Build the axis for the closed intervals in `spans`, walking
/// `min_index..=max_index` once from left to right.
///
/// A maximal uncovered run shorter than `gap_threshold_months` stays as
/// ordinary month points (short idle periods read better uncompressed); a
/// run at or above the threshold becomes one `Gap`. Each month is classified
/// by its own coverage only.
pub fn build_axis(
    spans: &[(MonthIndex, MonthIndex)],
    min_index: MonthIndex,
    max_index: MonthIndex,
    gap_threshold_months: i32,
) -> Vec<AxisPoint> {
    if spans.is_empty() || max_index < min_index {
        return Vec::new();
    }

    let span = (max_index - min_index + 1) as usize;
    let mut covered = vec![false; span];
    for &(start, end) in spans {
        let lo = start.max(min_index);
        let hi = end.min(max_index);
        for index in lo..=hi {
            covered[(index - min_index) as usize] = true;
        }
    }

    let mut points = Vec::with_capacity(span);
    let mut i = min_index;
    while i <= max_index {
        if covered[(i - min_index) as usize] {
            points.push(AxisPoint::Month { index: i });
            i += 1;
            continue;
        }

        // maximal run of uncovered months
        let mut j = i;
        while j <= max_index && !covered[(j - min_index) as usize] {
            j += 1;
        }
        let run = j - i;
        if run >= gap_threshold_months {
            points.push(AxisPoint::Gap {
                from_index: i,
                to_index: j - 1,
            });
        } else {
            for k in i..j {
                points.push(AxisPoint::Month { index: k });
            }
        }
        i = j;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flatten an axis back into the set of indices it covers.
    fn covered_indices(points: &[AxisPoint]) -> Vec<MonthIndex> {
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

    #[test]
    fn test_contiguous_coverage_has_no_gaps() {
        let points = build_axis(&[(0, 5)], 0, 5, 12);
        assert_eq!(points.len(), 6);
        assert!(points.iter().all(|p| matches!(p, AxisPoint::Month { .. })));
    }

    #[test]
    fn test_long_gap_compressed_to_one_point() {
        // coverage at [0,1] and [17,18]: 15 uncovered months in between
        let points = build_axis(&[(0, 1), (17, 18)], 0, 18, 12);
        let gaps: Vec<_> = points
            .iter()
            .filter(|p| matches!(p, AxisPoint::Gap { .. }))
            .collect();
        assert_eq!(gaps.len(), 1);
        assert_eq!(
            *gaps[0],
            AxisPoint::Gap {
                from_index: 2,
                to_index: 16
            }
        );
    }

    #[test]
    fn test_short_gap_kept_as_months() {
        // 5 uncovered months, below the threshold of 12
        let points = build_axis(&[(0, 1), (7, 8)], 0, 8, 12);
        assert!(points.iter().all(|p| matches!(p, AxisPoint::Month { .. })));
        assert_eq!(points.len(), 9);
    }

    #[test]
    fn test_gap_exactly_at_threshold_compresses() {
        let points = build_axis(&[(0, 0), (13, 13)], 0, 13, 12);
        assert!(points
            .iter()
            .any(|p| matches!(p, AxisPoint::Gap { from_index: 1, to_index: 12 })));
    }

    #[test]
    fn test_axis_partitions_full_range() {
        let points = build_axis(&[(3, 4), (30, 32)], 0, 32, 12);
        let indices = covered_indices(&points);
        assert_eq!(indices, (0..=32).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_spans_yield_empty_axis() {
        assert!(build_axis(&[], 0, 100, 12).is_empty());
    }

    #[test]
    fn test_leading_uncovered_run() {
        // floor precedes all coverage by 20 months
        let points = build_axis(&[(20, 22)], 0, 22, 12);
        assert_eq!(
            points[0],
            AxisPoint::Gap {
                from_index: 0,
                to_index: 19
            }
        );
        assert_eq!(covered_indices(&points), (0..=22).collect::<Vec<_>>());
    }
}
