//! Command-line argument parsing for medassist
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// medassist - Symptom-to-disease assistant with doctor referrals
#[derive(Parser, Debug)]
#[command(name = "medassist")]
#[command(version)]
#[command(about = "Predict a likely disease from selected symptoms and recommend a specialist", long_about = None)]
pub struct Args {
    /// Path to the model bundle JSON artifact
    #[arg(short, long)]
    pub bundle: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except results)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive session mode
    Start,

    /// Run a one-shot prediction for a comma-separated symptom list
    Predict {
        /// Symptoms, comma-separated (e.g. "headache,nausea")
        #[arg(short, long, value_delimiter = ',')]
        symptoms: Vec<String>,
    },

    /// List the symptom names the model knows
    Symptoms {
        /// Only show names containing this substring
        filter: Option<String>,
    },

    /// Show the evaluation report (top symptoms, held-out metrics)
    Report {
        /// How many top symptoms to rank
        #[arg(short = 'k', long)]
        top: Option<usize>,
    },

    /// Check that the model bundle is present and consistent
    Check,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
        }
    }

    /// Check if should show the loading spinner
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show per-request detail (ignored symptoms, timings)
    pub fn show_detail(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}
