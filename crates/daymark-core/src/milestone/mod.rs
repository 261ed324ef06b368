//! Milestone engine.
//!
//! Turns a birth date into three categorized lists of day-count
//! milestones, each tagged past or future relative to "now", plus the
//! current age in days and the easter-egg flag for rare day counts.

mod engine;
mod special;

pub use engine::{compute_milestones, compute_milestones_now, compute_milestones_on, DAY_MS};
pub use special::{is_special_day_count, SPECIAL_DAY_COUNTS};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::parse_long_date;

/// Fixed day counts and labels for Moments of Significance.
pub const MOMENTS_OF_SIGNIFICANCE: [(u32, &str); 8] = [
    (1_000, "Tiny Explorer"),
    (2_000, "Cute Little Kid"),
    (5_000, "Curious Teenager"),
    (10_000, "Young Adventurer"),
    (15_000, "Seasoned Navigator"),
    (20_000, "Wise Storyteller"),
    (25_000, "Keeper of Memories"),
    (30_000, "Living Legend"),
];

/// The three milestone families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneCategory {
    /// Every 1,000th day
    EchoesOfTime,
    /// Every 1,111th day
    RhythmsOfUniverse,
    /// The named set in [`MOMENTS_OF_SIGNIFICANCE`]
    MomentsOfSignificance,
}

impl MilestoneCategory {
    pub const ALL: [MilestoneCategory; 3] = [
        MilestoneCategory::EchoesOfTime,
        MilestoneCategory::RhythmsOfUniverse,
        MilestoneCategory::MomentsOfSignificance,
    ];

    /// Prefix used when building milestone ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            MilestoneCategory::EchoesOfTime => "echo",
            MilestoneCategory::RhythmsOfUniverse => "rhythm",
            MilestoneCategory::MomentsOfSignificance => "moment",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            MilestoneCategory::EchoesOfTime => "Echoes of Time",
            MilestoneCategory::RhythmsOfUniverse => "Rhythms of the Universe",
            MilestoneCategory::MomentsOfSignificance => "Moments of Significance",
        }
    }

    /// Day offsets for this category, in generation order, with the
    /// optional description attached to each.
    pub fn offsets(&self) -> Vec<(u32, Option<&'static str>)> {
        match self {
            MilestoneCategory::EchoesOfTime => (1..=40).map(|i| (i * 1_000, None)).collect(),
            MilestoneCategory::RhythmsOfUniverse => (1..=9).map(|i| (i * 1_111, None)).collect(),
            MilestoneCategory::MomentsOfSignificance => MOMENTS_OF_SIGNIFICANCE
                .iter()
                .map(|&(days, label)| (days, Some(label)))
                .collect(),
        }
    }
}

impl std::str::FromStr for MilestoneCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "echoes-of-time" | "echoes" | "echo" => Ok(MilestoneCategory::EchoesOfTime),
            "rhythms-of-universe" | "rhythms" | "rhythm" => {
                Ok(MilestoneCategory::RhythmsOfUniverse)
            }
            "moments-of-significance" | "moments" | "moment" => {
                Ok(MilestoneCategory::MomentsOfSignificance)
            }
            other => Err(format!("unknown milestone category: {other}")),
        }
    }
}

/// One computed milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    /// Days after birth
    pub days: u32,
    /// Long-form calendar date, e.g. "September 27, 1992"
    pub date: String,
    /// Inclusive: a milestone landing on today is past
    pub is_past: bool,
    /// Whole days remaining, rounded up. `None` on past milestones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Milestone {
    /// Calendar date recovered from the formatted `date` field.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_long_date(&self.date)
    }
}

/// Aggregate output of one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestonesData {
    pub echoes_of_time: Vec<Milestone>,
    pub rhythms_of_universe: Vec<Milestone>,
    pub moments_of_significance: Vec<Milestone>,
    /// Whole days elapsed since birth. Negative for a birth date after now.
    pub current_days: i64,
    pub has_special_milestone: bool,
}

impl MilestonesData {
    /// Milestones of one category.
    pub fn category(&self, category: MilestoneCategory) -> &[Milestone] {
        match category {
            MilestoneCategory::EchoesOfTime => &self.echoes_of_time,
            MilestoneCategory::RhythmsOfUniverse => &self.rhythms_of_universe,
            MilestoneCategory::MomentsOfSignificance => &self.moments_of_significance,
        }
    }

    /// All milestones, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.echoes_of_time
            .iter()
            .chain(&self.rhythms_of_universe)
            .chain(&self.moments_of_significance)
    }

    /// The closest future milestone across all categories.
    pub fn next_upcoming(&self) -> Option<&Milestone> {
        self.iter()
            .filter(|m| !m.is_past)
            .min_by_key(|m| (m.days_until, m.days))
    }
}
