//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::run::{Dataset, RunArgs};

#[derive(Parser)]
#[command(name = "uriscan")]
#[command(about = "Decode cached NFT token URIs and report rarity distribution", long_about = None)]
pub struct Cli {
    /// Log every classified asset
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the cache directory layout (raw, json, md, svg)
    #[command(visible_alias = "i")]
    Init {
        /// Cache root (uses configured default if not provided)
        #[arg(short, long, env = "URISCAN_CACHE_DIR")]
        cache_dir: Option<PathBuf>,

        /// Dataset directory to create
        #[arg(short, long, value_enum, default_value_t = Dataset::Assets)]
        dataset: Dataset,
    },

    /// Decode cached assets and report distribution per variant
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Decode cached metadatas and report a single distribution
    #[command(visible_alias = "k")]
    Check {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Decode a single raw record (file path or stdin)
    #[command(visible_alias = "d")]
    Decode {
        /// Raw record file (reads stdin if omitted or "-")
        input: Option<PathBuf>,

        /// Print the decoded SVG instead of the JSON
        #[arg(long, conflicts_with = "ratio")]
        svg: bool,

        /// Print the rarity ratio and its classification
        #[arg(long)]
        ratio: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default cache root
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Track per-tier asset indices by default
        #[arg(long)]
        membership: Option<bool>,

        /// Write decoded json/md/svg artifacts by default
        #[arg(long)]
        write_artifacts: Option<bool>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["uriscan", "render", "--no-write", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Render { args } => {
                assert!(args.no_write);
                assert!(!args.no_membership);
                assert!(matches!(args.format, OutputFormat::Json));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["uriscan", "-v", "-q", "render"]).is_err());
    }

    #[test]
    fn test_decode_flags_conflict() {
        assert!(Cli::try_parse_from(["uriscan", "decode", "--svg", "--ratio"]).is_err());
    }
}
