//! CLI argument definitions for uriscan
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod run;

pub use core::{Cli, Commands};
pub use run::{Dataset, OutputFormat, RunArgs};
