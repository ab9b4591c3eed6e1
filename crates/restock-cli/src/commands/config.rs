//! Configuration management commands for CLI.

use clap::Subcommand;
use restock_core::PurchaseCadence;

use crate::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Set a configuration value
    Set {
        /// Key: items.default_cadence or items.show_inactive
        key: String,
        /// New value
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "items.default_cadence" => {
                    let cadence = PurchaseCadence::parse(&value)
                        .ok_or_else(|| format!("unknown cadence: {value}"))?;
                    config.items.default_cadence = cadence.as_str().to_string();
                }
                "items.show_inactive" => {
                    config.items.show_inactive = value.parse()?;
                }
                _ => return Err(format!("unknown configuration key: {key}").into()),
            }
            config.save()?;
            println!("Configuration updated");
        }
    }

    Ok(())
}
