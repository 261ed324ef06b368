//! Sorted milestone timeline.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::milestone::{Milestone, MilestonesData};

/// Number of decorative variants (icons, accent colours) cycled through.
pub const DEFAULT_VARIANT_COUNT: usize = 4;

/// Variant for the entry at `index`. A count of zero behaves like one.
pub fn variant_for_index(index: usize, variant_count: usize) -> usize {
    index % variant_count.max(1)
}

/// A milestone positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub index: usize,
    pub variant: usize,
    pub milestone: Milestone,
}

/// Milestones ordered by `days` ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    milestones: Vec<Milestone>,
    variant_count: usize,
}

impl Timeline {
    /// Build a timeline; equal `days` keep their input order.
    pub fn new(mut milestones: Vec<Milestone>) -> Self {
        milestones.sort_by_key(|m| m.days);
        Self {
            milestones,
            variant_count: DEFAULT_VARIANT_COUNT,
        }
    }

    /// Timeline of the Moments of Significance.
    pub fn from_moments(data: &MilestonesData) -> Self {
        Self::new(data.moments_of_significance.clone())
    }

    /// Merge additional caller-supplied milestones and re-sort.
    pub fn with_extra(mut self, extra: impl IntoIterator<Item = Milestone>) -> Self {
        self.milestones.extend(extra);
        self.milestones.sort_by_key(|m| m.days);
        self
    }

    pub fn with_variant_count(mut self, variant_count: usize) -> Self {
        self.variant_count = variant_count;
        self
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Milestone at `index` in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfBounds`] past the end.
    pub fn detail(&self, index: usize) -> Result<&Milestone, ValidationError> {
        self.milestones
            .get(index)
            .ok_or_else(|| ValidationError::OutOfBounds {
                collection: "timeline".to_string(),
                index,
                len: self.milestones.len(),
            })
    }

    /// Entries with their display variant attached.
    pub fn entries(&self) -> Vec<TimelineEntry> {
        self.milestones
            .iter()
            .enumerate()
            .map(|(index, m)| TimelineEntry {
                index,
                variant: variant_for_index(index, self.variant_count),
                milestone: m.clone(),
            })
            .collect()
    }

    /// First future milestone and its index.
    pub fn next_upcoming(&self) -> Option<(usize, &Milestone)> {
        self.milestones.iter().enumerate().find(|(_, m)| !m.is_past)
    }

    /// Count of reached milestones.
    pub fn reached(&self) -> usize {
        self.milestones.iter().filter(|m| m.is_past).count()
    }
}
