use clap::Args;
use daymark_core::{climate_for_milestone, Config, Timeline};
use serde_json::json;

use super::{milestone_line, BirthArgs};

#[derive(Args)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub birth: BirthArgs,
    /// Show a single entry by position in the sorted timeline
    #[arg(long)]
    pub detail: Option<usize>,
    /// Merge Rhythms of the Universe into the timeline
    #[arg(long)]
    pub with_rhythms: bool,
}

pub fn run(args: TimelineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let data = args.birth.evaluate()?;

    let mut timeline =
        Timeline::from_moments(&data).with_variant_count(config.timeline.variant_count);
    if args.with_rhythms {
        timeline = timeline.with_extra(data.rhythms_of_universe.iter().cloned());
    }
    let as_json = args.birth.json || config.display.json_by_default;

    if let Some(index) = args.detail {
        let milestone = timeline.detail(index)?;
        let climate = climate_for_milestone(milestone);
        if as_json {
            let out = json!({
                "index": index,
                "milestone": milestone,
                "climate": climate,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{}", milestone_line(milestone));
            if let Some(overlay) = climate {
                println!(
                    "  climate ({:?} {}): CO2 {:.1} ppm, {:+.2} °C, sea level +{:.0} mm",
                    overlay.source,
                    overlay.record.year,
                    overlay.record.co2_ppm,
                    overlay.record.temperature_anomaly_c,
                    overlay.record.sea_level_rise_mm
                );
            }
        }
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&timeline.entries())?);
        return Ok(());
    }

    println!(
        "{} of {} milestones reached",
        timeline.reached(),
        timeline.len()
    );
    for entry in timeline.entries() {
        println!("[{}] {}", entry.index, milestone_line(&entry.milestone));
    }
    if let Some((index, next)) = timeline.next_upcoming() {
        println!();
        println!("Next up: [{index}] {} on {}", next.id, next.date);
    }
    Ok(())
}
