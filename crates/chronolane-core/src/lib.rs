//! # Chronolane Core Library
//!
//! Month-granularity timeline layout engine: turns a list of date-ranged
//! records into axis points, display lanes, and pixel coordinates for a
//! scrollable career/experience timeline. The engine is a pure function of
//! its inputs -- it never reads a clock, performs I/O, or caches between
//! calls -- so the rendering layer can re-invoke it wholesale on any data or
//! viewport change.
//!
//! ## Pipeline
//!
//! - **Parsing**: tolerant date strings (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`)
//!   become strict [`Month`] values at the [`RawRecord`] boundary; bad dates
//!   are typed errors, never silent defaults
//! - **Normalization**: floor clamping, ongoing-record resolution against a
//!   caller-supplied "now", truncation annotations
//! - **Axis**: gap compression collapses long idle runs into fixed-width
//!   markers
//! - **Lanes**: greedy interval packing so overlapping records land on
//!   separate rows
//! - **Pixels**: monotonic index-to-x mapping and total canvas size
//!
//! ## Key Components
//!
//! - [`layout_timeline`]: the single layout entry point
//! - [`LayoutConfig`] / [`LayoutResult`]: the call contract
//! - [`select_labels`]: density-controlled axis labeling
//! - [`locale`]: explicit-language text helpers for callers

pub mod error;
pub mod labels;
pub mod layout;
pub mod locale;
pub mod month;
pub mod record;

pub use error::{DateError, LayoutError};
pub use labels::{select_labels, AxisLabel};
pub use layout::{layout_timeline, AxisPoint, LaidOutRecord, LayoutConfig, LayoutResult, PixelMap};
pub use locale::Lang;
pub use month::{Month, MonthIndex};
pub use record::{RawRecord, TimelineRecord};
