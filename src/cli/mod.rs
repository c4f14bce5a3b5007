//! Command-line interface for string-inspector.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **inspect**: Analyze a string given as an argument or on stdin
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Inspect a string (printable ASCII skipped by default)
//! string-inspector inspect "naïve café"
//!
//! # Include printable ASCII characters
//! string-inspector inspect --ascii "abc"
//!
//! # Pipe from another tool
//! printf 'a\xc3\xa9' | string-inspector inspect -
//!
//! # JSON output for scripting
//! string-inspector inspect "€" --format json
//!
//! # Start web UI
//! string-inspector serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

pub mod inspect;

#[derive(Parser)]
#[command(name = "string-inspector")]
#[command(version)]
#[command(about = "Inspect the Unicode code points and UTF-8 encoding of a string")]
#[command(
    long_about = "string-inspector reports, per character of its input, the Unicode code point, the UTF-8 byte encoding, the byte offset, and the Unicode category flags that hold (control, digit, letter, punctuation, ...).\n\nIt is a diagnostic tool for tracking down encoding issues in strings. By default printable ASCII characters are skipped so the interesting characters stand out; pass --ascii to report everything."
)]
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
    /// Inspect a string's characters
    Inspect(inspect::InspectArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}
