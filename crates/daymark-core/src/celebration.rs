//! Celebration schedule for special day counts.
//!
//! When a run reports `has_special_milestone`, the front end waits a short
//! delay, then shows the celebration for a fixed duration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::milestone::MilestonesData;

/// Where a celebration is at a given elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationPhase {
    Pending,
    Active,
    Done,
}

/// Delay before the celebration starts and how long it lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelebrationSchedule {
    pub delay: Duration,
    pub duration: Duration,
}

impl Default for CelebrationSchedule {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1_000),
            duration: Duration::from_millis(5_000),
        }
    }
}

impl CelebrationSchedule {
    pub fn from_millis(delay_ms: u64, duration_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Schedule to run for `data`, or `None` when nothing is special.
    pub fn for_milestones(data: &MilestonesData, schedule: CelebrationSchedule) -> Option<Self> {
        data.has_special_milestone.then_some(schedule)
    }

    /// Phase at `elapsed` since the result was shown.
    /// Active covers `[delay, delay + duration)`.
    pub fn phase_at(&self, elapsed: Duration) -> CelebrationPhase {
        if elapsed < self.delay {
            CelebrationPhase::Pending
        } else if elapsed < self.delay.saturating_add(self.duration) {
            CelebrationPhase::Active
        } else {
            CelebrationPhase::Done
        }
    }

    /// Time at which the celebration ends.
    pub fn ends_at(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }
}
