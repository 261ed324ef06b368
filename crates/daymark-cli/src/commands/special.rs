use clap::Args;
use daymark_core::{CelebrationSchedule, Config};
use serde::Serialize;

use super::BirthArgs;

#[derive(Args)]
pub struct SpecialArgs {
    #[command(flatten)]
    pub birth: BirthArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpecialReport {
    current_days: i64,
    has_special_milestone: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    celebration: Option<CelebrationSchedule>,
}

pub fn run(args: SpecialArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let data = args.birth.evaluate()?;
    let report = SpecialReport {
        current_days: data.current_days,
        has_special_milestone: data.has_special_milestone,
        celebration: CelebrationSchedule::for_milestones(&data, config.celebration_schedule()),
    };

    if args.birth.json || config.display.json_by_default {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report.celebration {
        Some(schedule) => println!(
            "Day {} is a special day count! Celebration starts after {} ms and lasts {} ms.",
            report.current_days,
            schedule.delay.as_millis(),
            schedule.duration.as_millis()
        ),
        None => println!("Day {} is not a special day count.", report.current_days),
    }
    Ok(())
}
