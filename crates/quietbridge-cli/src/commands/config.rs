use clap::Subcommand;
use quietbridge_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dot-separated key (e.g. "streak.gentle_mode", "stats.heatmap_weeks")
        key: String,
    },
    /// Change one setting and save it
    Set {
        /// Dot-separated key
        key: String,
        /// New value, parsed as the setting's current type
        value: String,
    },
    /// Show every setting as `key = value`
    List {
        /// Print the whole config as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Restore the default settings
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::info!(key = %key, "config updated");
            // Echo the stored value, which may be normalised (e.g. "05" -> 5).
            let stored = config.get(&key).unwrap_or(value);
            println!("{key} = {stored}");
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for (key, value) in config.entries() {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("settings restored to defaults");
        }
    }
    Ok(())
}
