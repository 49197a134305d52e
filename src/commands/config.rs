//! Config command - read and write configuration keys

use crate::GeopinError;
use crate::cli::ConfigCommands;
use crate::config::GeopinConfig;

type Result<T> = std::result::Result<T, GeopinError>;

/// Execute a config subcommand
///
/// # Errors
///
/// Returns `GeopinError` if the setting is malformed, the key is unknown, or
/// the configuration cannot be saved.
pub fn execute(mut config: GeopinConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                GeopinError::InvalidInput("Invalid format. Use: geopin config set key=value".into())
            })?;
            let key = key.trim();

            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::Path => {
            println!("{}", GeopinConfig::config_path()?.display());
        }
    }
    Ok(())
}
