use clap::Args;
use daymark_core::{Config, Milestone, MilestoneCategory};

use super::{milestone_line, BirthArgs};

#[derive(Args)]
pub struct MilestonesArgs {
    #[command(flatten)]
    pub birth: BirthArgs,
    /// Only this category (echoes, rhythms, moments)
    #[arg(long)]
    pub category: Option<MilestoneCategory>,
    /// Hide milestones already reached
    #[arg(long)]
    pub upcoming: bool,
}

pub fn run(args: MilestonesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let data = args.birth.evaluate()?;
    let show_past = config.display.show_past && !args.upcoming;
    let keep = |m: &&Milestone| show_past || !m.is_past;

    if args.birth.json || config.display.json_by_default {
        match args.category {
            Some(category) => {
                let list: Vec<&Milestone> = data.category(category).iter().filter(keep).collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            }
            None if show_past => println!("{}", serde_json::to_string_pretty(&data)?),
            None => {
                let mut filtered = data.clone();
                filtered.echoes_of_time.retain(|m| !m.is_past);
                filtered.rhythms_of_universe.retain(|m| !m.is_past);
                filtered.moments_of_significance.retain(|m| !m.is_past);
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            }
        }
        return Ok(());
    }

    println!("Day {} of your life", data.current_days);
    if data.has_special_milestone {
        println!("Today is a special day count!");
    }

    let categories = match args.category {
        Some(category) => vec![category],
        None => MilestoneCategory::ALL.to_vec(),
    };
    for category in categories {
        println!();
        println!("{}", category.title());
        for m in data.category(category).iter().filter(keep) {
            println!("{}", milestone_line(m));
        }
    }
    if args.category.is_none() {
        if let Some(next) = data.next_upcoming() {
            println!();
            println!("Next up: {} on {}", next.id, next.date);
        }
    }
    Ok(())
}
