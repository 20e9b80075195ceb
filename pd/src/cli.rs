//! CLI argument parsing for promptdoc

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pd")]
#[command(author, version, about = "Extract customizable assistant prompts from a prompt document", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Prompt document to read (overrides the config file)
    #[arg(short, long, global = true)]
    pub document: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which prompts the document customizes
    List,

    /// Print the prompt for one category
    Get {
        /// Category: correction, translation, completion or explanation
        #[arg(required = true)]
        category: String,

        /// Text to print when the document has no prompt for the category
        /// (default: the built-in prompt)
        #[arg(short, long)]
        fallback: Option<String>,
    },

    /// Print every customized prompt
    Show {
        /// Only print the first N characters of each prompt
        #[arg(short, long)]
        preview: Option<usize>,
    },

    /// Write a starter prompt document with the built-in prompts
    Init {
        /// Overwrite an existing document
        #[arg(short, long)]
        force: bool,
    },
}
