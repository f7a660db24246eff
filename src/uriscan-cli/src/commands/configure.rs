//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up uriscan CLI defaults.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

/// Requested configuration changes
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub cache_dir: Option<PathBuf>,
    pub membership: Option<bool>,
    pub write_artifacts: Option<bool>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.cache_dir.is_none() && self.membership.is_none() && self.write_artifacts.is_none()
    }

    /// Apply the set fields to `config`
    fn apply(self, config: &mut Config) {
        if let Some(dir) = self.cache_dir {
            config.cache_dir = Some(dir);
        }
        if let Some(membership) = self.membership {
            config.membership = Some(membership);
        }
        if let Some(write) = self.write_artifacts {
            config.write_artifacts = Some(write);
        }
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `update` - Settings to store
/// * `show` - If true, show current configuration
pub fn handle(update: ConfigUpdate, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if update.is_empty() {
        show_usage();
        return Ok(());
    }

    update.apply(&mut config);
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    let cache_dir = config.resolve_cache_dir(None);
    println!("Cache dir:       {}", cache_dir.display());
    println!("Membership:      {}", config.membership());
    println!("Write artifacts: {}", config.write_artifacts());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: uriscan configure --cache-dir DIR");
    println!("   or: uriscan configure --membership false --write-artifacts false");
    println!("   or: uriscan configure --show");
}
