use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "daymark-cli", version, about = "Daymark CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Milestones for a birth date
    Milestones(commands::milestones::MilestonesArgs),
    /// Check for a special day count
    Special(commands::special::SpecialArgs),
    /// Moments of Significance in timeline order
    Timeline(commands::timeline::TimelineArgs),
    /// Climate data for a year
    Climate(commands::climate::ClimateArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Milestones(args) => commands::milestones::run(args),
        Commands::Special(args) => commands::special::run(args),
        Commands::Timeline(args) => commands::timeline::run(args),
        Commands::Climate(args) => commands::climate::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
