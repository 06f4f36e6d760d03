use clap::{Parser, Subcommand};

use crate::logs::Confidence;

/// Command-line client for the calorie-log API
#[derive(Parser, Debug)]
#[command(name = "calog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all log entries
    List,

    /// Create a new log entry
    Add {
        /// comma-separated food items, e.g. "Pizza, Salad, Juice"
        #[arg(long)]
        food: String,

        /// calorie count
        #[arg(long)]
        calories: String,

        /// confidence level (high, medium, low)
        #[arg(long, default_value = "medium")]
        confidence: Confidence,
    },

    /// Edit an existing log entry
    Edit {
        /// id of the entry to edit
        id: String,

        /// replacement comma-separated food items
        #[arg(long)]
        food: Option<String>,

        /// replacement calorie count
        #[arg(long)]
        calories: Option<String>,

        /// replacement confidence level
        #[arg(long)]
        confidence: Option<Confidence>,
    },

    /// Delete a log entry after confirmation
    Delete {
        /// id of the entry to delete
        id: String,

        /// skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
