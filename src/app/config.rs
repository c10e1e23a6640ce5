use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use crate::app::pattern::Pattern;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Values accepted in `config.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub pattern: Option<String>,
    pub target_directory: Option<PathBuf>,
    pub target_file: Option<PathBuf>,
}

fn default_settings_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("fileops").join("config.toml"))
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).context("Failed to parse settings TOML")
}

/// Reads the settings file. A missing file is only an error when the path was
/// given explicitly.
fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_settings_path()?;
            if !path.exists() {
                log::debug!("No settings file at {}", path.display());
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings at {}", path.display()))?;
    parse_settings(&content).with_context(|| format!("Invalid settings in {}", path.display()))
}

/// Merges CLI arguments over the settings file. CLI values win.
pub fn merge(cli: &Cli, settings: Settings) -> Result<RuntimeConfig> {
    let pattern = match cli.pattern.as_deref().or(settings.pattern.as_deref()) {
        Some(template) => Pattern::parse(template)?,
        None => Pattern::default(),
    };

    Ok(RuntimeConfig {
        target_directory: cli.command.dir().cloned().or(settings.target_directory),
        target_file: cli.command.source().cloned().or(settings.target_file),
        pattern,
    })
}

pub fn resolve_config(cli: &Cli) -> Result<RuntimeConfig> {
    let settings = load_settings(cli.config.as_deref())?;
    merge(cli, settings)
}
