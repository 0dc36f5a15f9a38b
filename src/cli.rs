use std::path::PathBuf;

use clap::Parser;

/// parse-review — normalize review-run JSON for agent consumption
#[derive(Parser, Debug, Clone)]
#[command(name = "parse-review", version, about)]
pub struct Cli {
    /// Path to the review JSON file (reads standard input when omitted)
    pub input: Option<PathBuf>,
}
