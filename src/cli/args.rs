//! CLI argument definitions using clap
//!
//! Commands:
//! - quillwiki init --config <path>
//! - quillwiki save <name> [--file <path>] [--author <name>] [--comment <text>]
//! - quillwiki view <name>
//! - quillwiki render <name>
//! - quillwiki history <name>
//! - quillwiki diff <name> <v1> <v2>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// quillwiki - a WYSIWYG wiki engine with immutable page history
#[derive(Parser, Debug)]
#[command(name = "quillwiki")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the store file named by the configuration
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./quillwiki.json")]
        config: PathBuf,
    },

    /// Save page content from a file or stdin
    Save {
        /// Page name (a WikiWord)
        name: String,

        /// Read content from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Author display name; omitted means an anonymous edit
        #[arg(long)]
        author: Option<String>,

        /// Free-text edit comment
        #[arg(long, default_value = "")]
        comment: String,

        /// Client address recorded in history
        #[arg(long, default_value = "127.0.0.1")]
        address: String,

        /// Path to configuration file
        #[arg(long, default_value = "./quillwiki.json")]
        config: PathBuf,
    },

    /// Print the page's stored content
    View {
        /// Page name (a WikiWord)
        name: String,

        /// Path to configuration file
        #[arg(long, default_value = "./quillwiki.json")]
        config: PathBuf,
    },

    /// Print the page's content after the transform chain
    Render {
        /// Page name (a WikiWord)
        name: String,

        /// Path to configuration file
        #[arg(long, default_value = "./quillwiki.json")]
        config: PathBuf,
    },

    /// List history entries, newest first
    History {
        /// Page name (a WikiWord)
        name: String,

        /// Path to configuration file
        #[arg(long, default_value = "./quillwiki.json")]
        config: PathBuf,
    },

    /// Print an HTML diff table between two versions
    Diff {
        /// Page name (a WikiWord)
        name: String,

        /// Entry id of the left column
        v1: String,

        /// Entry id of the right column
        v2: String,

        /// Path to configuration file
        #[arg(long, default_value = "./quillwiki.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
