use chrono::NaiveDate;
use clap::Args;
use quietbridge_core::storage::CHECKINS_FILE;
use quietbridge_core::{CheckinStore, Config, Heatmap};

#[derive(Args)]
pub struct HeatmapArgs {
    /// Number of weeks to show (defaults to stats.heatmap_weeks)
    #[arg(long)]
    weeks: Option<u32>,
    /// Print cells as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: HeatmapArgs, today: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let weeks = match args.weeks {
        Some(weeks) => weeks,
        None => Config::load_or_default().stats.heatmap_weeks,
    };

    let ledger = CheckinStore::open(CHECKINS_FILE)?.load();
    if ledger.is_empty() && !args.json {
        println!("No check-ins yet.");
        return Ok(());
    }

    let map = Heatmap::build(&ledger, weeks, today);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&map.cells)?);
    } else {
        println!("{}", map.render_text());
    }
    Ok(())
}
