pub mod climate;
pub mod config;
pub mod milestones;
pub mod special;
pub mod timeline;

use clap::Args;
use daymark_core::error::Result;
use daymark_core::validation::parse_iso_date;
use daymark_core::{
    compute_milestones_now, compute_milestones_on, parse_birth_date, parse_birth_date_now,
    Milestone, MilestonesData,
};
use tracing::debug;

/// Birth date plus the evaluation point shared by milestone commands.
#[derive(Args)]
pub struct BirthArgs {
    /// Birth date (YYYY-MM-DD or "Month D, YYYY")
    pub birth_date: String,
    /// Evaluate as of midnight UTC on this date (YYYY-MM-DD) instead of now
    #[arg(long)]
    pub today: Option<String>,
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

impl BirthArgs {
    /// Validate the birth date and run the engine.
    pub fn evaluate(&self) -> Result<MilestonesData> {
        let data = match &self.today {
            Some(today) => {
                let today = parse_iso_date(today)?;
                let birth = parse_birth_date(&self.birth_date, today)?;
                debug!(%birth, %today, "evaluating at fixed date");
                compute_milestones_on(birth, today)
            }
            None => {
                let birth = parse_birth_date_now(&self.birth_date)?;
                compute_milestones_now(birth)
            }
        };
        Ok(data)
    }
}

/// One-line text rendering of a milestone.
pub fn milestone_line(m: &Milestone) -> String {
    let status = match m.days_until {
        None => "reached".to_string(),
        Some(1) => "in 1 day".to_string(),
        Some(n) => format!("in {n} days"),
    };
    let mark = if m.is_past { "✓" } else { "·" };
    match &m.description {
        Some(desc) => format!(
            "  {mark} {:<10} {:>6} days  {:<20} {status}  ({desc})",
            m.id, m.days, m.date
        ),
        None => format!("  {mark} {:<10} {:>6} days  {:<20} {status}", m.id, m.days, m.date),
    }
}
