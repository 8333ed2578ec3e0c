//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "workjournal")]
#[command(about = "Dated work/learning journal with a weekly view", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter (e.g., debug, workjournal=trace); overrides the configured level
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record an entry
    Add {
        /// Category (work, learning, other)
        #[arg(short, long)]
        category: String,

        /// Date (YYYY-MM-DD, today, yesterday, last monday, ...)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Entry text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show entries grouped by week
    List {
        /// Only entries on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only entries on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Serve the journal page over HTTP
    Serve {
        /// Listen address (default: configured bind)
        #[arg(short, long)]
        bind: Option<String>,
    },
}
