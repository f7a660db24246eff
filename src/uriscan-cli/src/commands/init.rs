//! Cache bootstrap command handler

use anyhow::Result;
use std::path::Path;

use crate::cache::CacheDir;
use crate::cli::Dataset;
use crate::config::Config;

/// Handle the init command
pub fn handle(cache_dir: Option<&Path>, dataset: Dataset) -> Result<()> {
    let config = Config::load()?;
    let cache = CacheDir::new(config.resolve_cache_dir(cache_dir).join(dataset.dir_name()));

    let created = cache.bootstrap()?;
    if created.is_empty() {
        println!("Cache already initialized at {}", cache.root().display());
    } else {
        for dir in &created {
            println!("Created {}", dir.display());
        }
    }
    println!(
        "Put raw token URIs in {} (files 0, 1, ... and contract)",
        cache.raw_dir().display()
    );

    Ok(())
}
