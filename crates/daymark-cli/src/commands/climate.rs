use clap::Args;
use daymark_core::{climate_change_since, climate_overlay, Config};

#[derive(Args)]
pub struct ClimateArgs {
    /// Calendar year to look up
    pub year: i32,
    /// Report the change since this year (e.g. a birth year)
    #[arg(long)]
    pub since: Option<i32>,
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ClimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let as_json = args.json || config.display.json_by_default;

    match args.since {
        Some(from) => {
            let delta = climate_change_since(from, args.year);
            if as_json {
                println!("{}", serde_json::to_string_pretty(&delta)?);
            } else {
                println!(
                    "{} -> {}: CO2 {:+.1} ppm, temperature {:+.2} °C, sea level {:+.0} mm",
                    from,
                    args.year,
                    delta.co2_ppm,
                    delta.temperature_anomaly_c,
                    delta.sea_level_rise_mm
                );
            }
        }
        None => {
            let overlay = climate_overlay(args.year);
            if as_json {
                println!("{}", serde_json::to_string_pretty(&overlay)?);
            } else {
                println!(
                    "{} ({:?}, nearest {}): CO2 {:.1} ppm, temperature {:+.2} °C, sea level +{:.0} mm",
                    overlay.requested_year,
                    overlay.source,
                    overlay.record.year,
                    overlay.record.co2_ppm,
                    overlay.record.temperature_anomaly_c,
                    overlay.record.sea_level_rise_mm
                );
            }
        }
    }
    Ok(())
}
