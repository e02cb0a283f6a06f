//! Configuration commands for CLI.
//!
//! Keys are dot-separated paths into the TOML config, e.g.
//! `profile.name` or `display.pretty_json`.

use clap::Subcommand;
use habitdeck_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one config value
    Get {
        /// Dot-separated key, e.g. "profile.name"
        key: String,
    },
    /// Update a config value and persist it
    Set {
        /// Dot-separated key, e.g. "display.pretty_json"
        key: String,
        /// New value, parsed into the key's existing type
        value: String,
    },
    /// Show the full configuration
    List,
    /// Restore the default configuration
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{}", super::render_json(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
