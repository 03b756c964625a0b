//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rhiz-tag")]
#[command(about = "Date tags for notes, zettelkasten and archives", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a tag (default command)
    Tag {
        /// Instant to tag instead of now (e.g., 2024-09-25 13:30:00, 2024-09-25, @1727271000)
        #[arg(short, long, value_name = "INSTANT")]
        at: Option<String>,

        /// Leave out the random suffix
        #[arg(long)]
        no_suffix: bool,
    },

    /// Find the date of a tag
    Date {
        /// Tag to decode (e.g., aQu-TWr or aQu)
        tag: String,
    },

    /// Answer one date tag per input line on stdin (conformance testing)
    Stream,

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
}
