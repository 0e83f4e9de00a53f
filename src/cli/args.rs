//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line
#[derive(Parser)]
#[command(name = "autocorrect")]
#[command(about = "Spelling correction within one edit, backed by a radix trie")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Read a dictionary and queries in the line protocol and check each query.
    ///
    /// The first line holds the number of dictionary words N, the next N
    /// lines hold the words, and every remaining line is a query.
    Check {
        /// Read from this file instead of standard input
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Compare queries and words exactly as written
        #[arg(long)]
        no_case_fold: bool,

        /// Check empty query lines instead of skipping them
        #[arg(long)]
        keep_blank_lines: bool,
    },

    /// Check terms against a dictionary file (one word per line)
    Query {
        /// Terms to check
        #[arg(required = true)]
        terms: Vec<String>,

        /// Dictionary file
        #[arg(short, long)]
        dict: PathBuf,

        /// Compare terms and words exactly as written
        #[arg(long)]
        no_case_fold: bool,
    },

    /// Display dictionary information
    Info {
        /// Dictionary file
        #[arg(short, long)]
        dict: PathBuf,

        /// Count words exactly as written
        #[arg(long)]
        no_case_fold: bool,
    },

    /// Show or change saved settings
    Settings {
        /// Set whether words and queries are lowercased
        #[arg(long)]
        set_case_fold: Option<bool>,

        /// Set whether empty query lines are skipped
        #[arg(long)]
        set_skip_blank_lines: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Commands {
    /// Case folding requested on the command line, if any
    pub fn case_fold_override(&self) -> Option<bool> {
        match self {
            Commands::Check { no_case_fold, .. }
            | Commands::Query { no_case_fold, .. }
            | Commands::Info { no_case_fold, .. } => no_case_fold.then_some(false),
            Commands::Settings { .. } => None,
        }
    }

    /// Blank-line handling requested on the command line, if any
    pub fn skip_blank_lines_override(&self) -> Option<bool> {
        match self {
            Commands::Check {
                keep_blank_lines, ..
            } => keep_blank_lines.then_some(false),
            _ => None,
        }
    }
}
