use clap::Args;
use quietbridge_core::storage::MOODS_FILE;
use quietbridge_core::{engagement_note, Config, MoodStore, MoodSummary};
use serde::Serialize;

#[derive(Args)]
pub struct DashboardArgs {
    /// Chat messages sent this session
    #[arg(long, default_value_t = 0)]
    chats: usize,
}

#[derive(Serialize)]
struct Dashboard {
    #[serde(flatten)]
    summary: MoodSummary,
    note: &'static str,
}

pub fn run(args: DashboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let top_moods = Config::load_or_default().stats.top_moods;
    let log = MoodStore::open(MOODS_FILE)?.load();

    let dashboard = Dashboard {
        summary: log.summary(top_moods),
        note: engagement_note(log.len(), args.chats),
    };
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
