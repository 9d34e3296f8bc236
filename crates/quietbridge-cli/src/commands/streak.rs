use chrono::NaiveDate;
use clap::Args;
use quietbridge_core::storage::CHECKINS_FILE;
use quietbridge_core::{CheckinStore, Config, GracePolicy, StreakCard};

#[derive(Args)]
pub struct StreakArgs {
    /// Number of missed days a streak survives
    #[arg(long, conflicts_with = "strict")]
    grace: Option<u32>,
    /// Any missed day breaks the streak
    #[arg(long)]
    strict: bool,
}

pub fn run(args: StreakArgs, today: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let mut card_config = Config::load_or_default().card_config();
    if args.strict {
        card_config.grace = GracePolicy::Strict;
    } else if let Some(days) = args.grace {
        card_config.grace = GracePolicy::Custom(days);
    }

    let ledger = CheckinStore::open(CHECKINS_FILE)?.load();
    let card = StreakCard::build(&ledger, &card_config, today);
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}
