//! Batch command handlers (`render`, `check`)

use anyhow::{bail, Context, Result};

use uriscan::{Batch, BatchOptions, BatchReport, Discard};

use crate::cache::CacheDir;
use crate::cli::{Dataset, RunArgs};
use crate::config::Config;
use crate::report;

/// Handle `render`: per-variant distribution over `assets/`
pub fn render(args: &RunArgs) -> Result<()> {
    run(args, Dataset::Assets)
}

/// Handle `check`: single distribution over `metadatas/`
pub fn check(args: &RunArgs) -> Result<()> {
    run(args, Dataset::Metadatas)
}

fn run(args: &RunArgs, dataset: Dataset) -> Result<()> {
    let config = Config::load()?;
    let cache = CacheDir::new(
        config
            .resolve_cache_dir(args.cache_dir.as_deref())
            .join(dataset.dir_name()),
    );

    if !cache.is_initialized() {
        cache.bootstrap()?;
        bail!(
            "Path {} created with raw, json, md and svg; put raw token URIs in {} and run again",
            cache.root().display(),
            cache.raw_dir().display()
        );
    }

    let options = batch_options(args, dataset, &config);
    let write = !args.no_write && config.write_artifacts();
    let report = execute(&cache, options, write)?;

    report::print(&report, args.format)
}

fn batch_options(args: &RunArgs, dataset: Dataset, config: &Config) -> BatchOptions {
    let per_variant = dataset == Dataset::Assets;
    BatchOptions {
        route_variants: per_variant,
        track_membership: !args.no_membership && config.membership(),
        process_contract: per_variant,
        limit: args.count,
    }
}

/// Run one batch over `cache`, optionally writing artifacts next to it.
pub fn execute(cache: &CacheDir, options: BatchOptions, write: bool) -> Result<BatchReport> {
    let batch = Batch::new(options);
    let result = if write {
        let mut writer = cache.writer()?;
        batch.run(cache, &mut writer)
    } else {
        batch.run(cache, &mut Discard)
    };

    result.with_context(|| format!("Batch over {} aborted", cache.root().display()))
}
