//! Axis label selection.
//!
//! Decides which axis points carry month/year labels so a dense timeline
//! stays legible. Labels carry [`Month`] values, not formatted strings; text
//! formatting belongs to the locale layer.

use serde::{Deserialize, Serialize};

use crate::layout::AxisPoint;
use crate::month::{Month, MonthIndex};

/// A label slot on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AxisLabel {
    /// Label anchored at a visible month
    Month {
        index: MonthIndex,
        month: Month,
        /// Show the abbreviated month name (density-controlled)
        show_month: bool,
        /// Show the year figure (every January)
        show_year: bool,
    },
    /// Ellipsis marker over a compressed gap
    Gap {
        from_index: MonthIndex,
        to_index: MonthIndex,
    },
}

/// Pick labels for an axis: every `label_every`-th month plus the first and
/// last points get a month label, every January gets a year label, every gap
/// gets an ellipsis marker.
pub fn select_labels(points: &[AxisPoint], label_every: usize) -> Vec<AxisLabel> {
    let every = label_every.max(1);
    let last = points.len().saturating_sub(1);

    let mut labels = Vec::new();
    for (i, point) in points.iter().enumerate() {
        match point {
            AxisPoint::Gap {
                from_index,
                to_index,
            } => labels.push(AxisLabel::Gap {
                from_index: *from_index,
                to_index: *to_index,
            }),
            AxisPoint::Month { index } => {
                let month = Month::from_index(*index);
                let show_month = i % every == 0 || i == 0 || i == last;
                let show_year = month.month == 1;
                if show_month || show_year {
                    labels.push(AxisLabel::Month {
                        index: *index,
                        month,
                        show_month,
                        show_year,
                    });
                }
            }
        }
    }
    labels
}
