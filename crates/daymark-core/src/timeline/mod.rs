//! Timeline view model.
//!
//! This module provides:
//! - Ascending-by-days ordering of milestones for display
//! - Detail lookup by position in the sorted list
//! - Decorative variant selection by index modulo N

mod view;

pub use view::{variant_for_index, Timeline, TimelineEntry, DEFAULT_VARIANT_COUNT};
