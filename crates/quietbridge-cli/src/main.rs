use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use quietbridge_core::parse_date;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quietbridge-cli", version, about = "QuietBridge mood check-in CLI")]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily check-ins
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Streak card: streaks, weekly goal and recent mood
    Streak(commands::streak::StreakArgs),
    /// Calendar heatmap of check-in levels
    Heatmap(commands::heatmap::HeatmapArgs),
    /// Mood history summary
    Dashboard(commands::dashboard::DashboardArgs),
    /// Show the mood meter vocabulary
    Meter,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn today(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(value) => Ok(parse_date(value)?),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = today(cli.date.as_deref()).and_then(|today| match cli.command {
        Commands::Checkin { action } => commands::checkin::run(action, today),
        Commands::Streak(args) => commands::streak::run(args, today),
        Commands::Heatmap(args) => commands::heatmap::run(args, today),
        Commands::Dashboard(args) => commands::dashboard::run(args),
        Commands::Meter => commands::meter::run(),
        Commands::Config { action } => commands::config::run(action),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
