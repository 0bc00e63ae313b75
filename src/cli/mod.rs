//! Command-line interface for assembly-annotator.
//!
//! ```text
//! # Annotate a single assembly string
//! assembly-annotator annotate "P12345_2,RF00177_1"
//!
//! # With reference tables
//! assembly-annotator annotate "P12345_2,RF00177_1" \
//!     --symmetry symmetry_reference.csv \
//!     --methods methods.csv --species species.csv
//!
//! # JSON output for scripting
//! assembly-annotator annotate "P12345_2" --format json
//! ```

use clap::{Parser, Subcommand};

pub mod annotate;

#[derive(Parser)]
#[command(name = "assembly-annotator")]
#[command(version)]
#[command(about = "Annotate macromolecular assembly records from delimited identifier strings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate one or more assembly strings
    Annotate(annotate::AnnotateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
