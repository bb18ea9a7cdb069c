use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::{CountdownConfig, CountdownSettings};

pub const CONFIG_FILE_NAME: &str = "countdown.toml";

/// `<config dir>/countdown.toml` for the current user, if a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "RustCountdown", "Countdown")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Loads the countdown configuration.
///
/// An explicit path must exist. Without one, the default location is tried
/// and the built-in calendar is used when nothing is there.
pub fn load_config(path: Option<&Path>) -> Result<CountdownConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => match default_config_path() {
            Some(path) if path.exists() => load_config_file(&path),
            _ => {
                log::info!("No countdown config found, using built-in calendar");
                Ok(CountdownConfig::default())
            }
        },
    }
}

pub fn load_config_file(path: &Path) -> Result<CountdownConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read countdown config from {}", path.display()))?;
    let config = parse_config(&data)
        .with_context(|| format!("invalid countdown config in {}", path.display()))?;

    log::info!(
        "Loaded countdown config from {}: {} -> {}, {} holidays",
        path.display(),
        config.range.start(),
        config.range.end(),
        config.holidays.len()
    );
    Ok(config)
}

pub fn parse_config(data: &str) -> Result<CountdownConfig> {
    let settings: CountdownSettings = toml::from_str(data)?;
    Ok(settings.validate()?)
}

pub fn to_toml(config: &CountdownConfig) -> Result<String> {
    Ok(toml::to_string_pretty(&config.to_settings())?)
}

pub fn save_config(path: &Path, config: &CountdownConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    fs::write(path, to_toml(config)?)
        .with_context(|| format!("failed to write countdown config to {}", path.display()))?;
    Ok(())
}
