//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::estimate::SignType;

/// Login command arguments.
#[derive(Debug, Args)]
pub struct LoginCommand {
    /// The team password. Prompted on stdin when omitted.
    pub password: Option<String>,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Filter by category (use `categories` to see the fixed list)
    #[arg(long, default_value = "All")]
    pub category: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// The search text (matches title, description, and tags)
    pub query: String,

    /// Filter by category
    #[arg(long, default_value = "All")]
    pub category: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Estimate command arguments.
///
/// Defaults describe the most common job: a single standard ADA room sign.
#[derive(Debug, Args)]
pub struct EstimateCommand {
    /// Sign type (ada-sign, cast-aluminum, acrylic-plaque, vinyl-graphics)
    #[arg(short = 't', long = "sign-type", default_value = "ada-sign")]
    pub sign_type: SignType,

    /// Number of signs
    #[arg(short = 'n', long, default_value_t = 1)]
    pub quantity: u32,

    /// Width in inches
    #[arg(short, long, default_value_t = 8.0)]
    pub width: f64,

    /// Height in inches (letter height for dimensional letters)
    #[arg(short = 'H', long, default_value_t = 8.0)]
    pub height: f64,

    /// Total installation hours
    #[arg(long = "hours", default_value_t = 0.5)]
    pub install_hours: f64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Flashcard quiz commands.
#[derive(Debug, Subcommand)]
pub enum QuizCommand {
    /// List all flashcard questions
    List {
        /// Include answers
        #[arg(short, long)]
        answers: bool,
    },

    /// Show a single card
    Show {
        /// Card number (1-based)
        index: usize,

        /// Reveal the answer
        #[arg(short, long)]
        answer: bool,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
