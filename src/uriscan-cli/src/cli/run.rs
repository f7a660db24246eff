//! Arguments shared by the batch commands

use clap::Args;
use std::path::PathBuf;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Dataset directory under the cache root
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Dataset {
    /// Token URIs rendered per variant (`render`)
    Assets,
    /// Token URIs checked as one collection (`check`)
    Metadatas,
}

impl Dataset {
    pub fn dir_name(self) -> &'static str {
        match self {
            Dataset::Assets => "assets",
            Dataset::Metadatas => "metadatas",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Cache root containing assets/ and metadatas/ (uses configured default if not provided)
    #[arg(short, long, env = "URISCAN_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Do not write decoded json/md/svg artifacts
    #[arg(long)]
    pub no_write: bool,

    /// Do not list asset indices per tier
    #[arg(long)]
    pub no_membership: bool,

    /// Process at most this many assets
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
