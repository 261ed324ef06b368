//! # Daymark Core Library
//!
//! This library computes calendar-based life milestones from a birth date
//! and the data that decorates them. The `daymark-cli` binary is a thin
//! front end over the same API.
//!
//! ## Architecture
//!
//! - **Milestone engine**: a pure function from (birth date, now) to three
//!   categorized milestone lists, the current age in days and a flag for
//!   rare "special" day counts
//! - **Validation**: rejects empty, malformed and future birth dates before
//!   they reach the engine
//! - **Climate overlay**: nearest-year lookups over static tables
//! - **Timeline**: sorted view, detail by index, decorative variants
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`compute_milestones`]: the engine
//! - [`MilestonesData`]: its output
//! - [`Timeline`]: presentation ordering
//! - [`Config`]: application configuration management

pub mod celebration;
pub mod climate;
pub mod error;
pub mod format;
pub mod milestone;
pub mod storage;
pub mod timeline;
pub mod validation;

pub use celebration::{CelebrationPhase, CelebrationSchedule};
pub use climate::{
    climate_change_since, climate_for_milestone, climate_for_year, climate_overlay,
    future_projection, ClimateDelta, ClimateOverlay, ClimateRecord, ClimateSource,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use format::{format_long_date, parse_long_date, year_from_long_date};
pub use milestone::{
    compute_milestones, compute_milestones_now, compute_milestones_on, is_special_day_count,
    Milestone, MilestoneCategory, MilestonesData, SPECIAL_DAY_COUNTS,
};
pub use storage::Config;
pub use timeline::{Timeline, TimelineEntry};
pub use validation::{parse_birth_date, parse_birth_date_now};
