//! Command-line interface for signdesk.
//!
//! This module provides the CLI structure and command handlers for the
//! `sigdesk` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, EstimateCommand, ListCommand, LoginCommand, OutputFormat, QuizCommand,
    SearchCommand, StatusCommand,
};

/// sigdesk - Moon River knowledge base
///
/// Password-gated access to the team's reference documents (contracts,
/// templates, pricing guides) and the project-management SOP flashcard deck.
#[derive(Debug, Parser)]
#[command(name = "sigdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with the team password
    Login(LoginCommand),

    /// Log out, clearing the stored session
    Logout,

    /// Show session and catalog status
    Status(StatusCommand),

    /// List catalog documents
    List(ListCommand),

    /// Search catalog documents
    Search(SearchCommand),

    /// Show the fixed category list
    Categories,

    /// Price a sign job against the internal rate card
    Estimate(EstimateCommand),

    /// Study the SOP flashcard deck
    #[command(subcommand)]
    Quiz(QuizCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "sigdesk");
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        for (verbose, expected) in [
            (0, crate::logging::Verbosity::Normal),
            (1, crate::logging::Verbosity::Verbose),
            (2, crate::logging::Verbosity::Trace),
        ] {
            let cli = Cli {
                config: None,
                verbose,
                quiet: false,
                command: Command::Logout,
            };
            assert_eq!(cli.verbosity(), expected);
        }
    }

    #[test]
    fn test_parse_login_with_password() {
        let args = vec!["sigdesk", "login", "MoonRiver2025!"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Login(cmd) => assert_eq!(cmd.password.as_deref(), Some("MoonRiver2025!")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_login_without_password() {
        let args = vec!["sigdesk", "login"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Login(LoginCommand { password: None })
        ));
    }

    #[test]
    fn test_parse_logout() {
        let args = vec!["sigdesk", "logout"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Logout));
    }

    #[test]
    fn test_parse_search_with_category() {
        let args = vec!["sigdesk", "search", "sov", "--category", "Financial"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Search(cmd) => {
                assert_eq!(cmd.query, "sov");
                assert_eq!(cmd.category, "Financial");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_default_category() {
        let args = vec!["sigdesk", "search", "contract"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Search(cmd) => assert_eq!(cmd.category, "All"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_json_format() {
        let args = vec!["sigdesk", "list", "--format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::List(cmd) => assert_eq!(cmd.format, OutputFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_quiz_show() {
        let args = vec!["sigdesk", "quiz", "show", "3", "--answer"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Quiz(QuizCommand::Show { index, answer }) => {
                assert_eq!(index, 3);
                assert!(answer);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_estimate_defaults() {
        let args = vec!["sigdesk", "estimate"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Estimate(cmd) => {
                assert_eq!(cmd.sign_type, crate::estimate::SignType::AdaSign);
                assert_eq!(cmd.quantity, 1);
                assert!(!cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_estimate_full() {
        let args = vec![
            "sigdesk", "estimate", "-t", "cast-aluminum", "-n", "4", "-H", "12", "--hours", "2",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Estimate(cmd) => {
                assert_eq!(cmd.sign_type, crate::estimate::SignType::CastAluminum);
                assert_eq!(cmd.quantity, 4);
                assert!((cmd.height - 12.0).abs() < f64::EPSILON);
                assert!((cmd.install_hours - 2.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_estimate_unknown_sign_type() {
        let args = vec!["sigdesk", "estimate", "-t", "neon"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["sigdesk", "-c", "/custom/config.toml", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let args = vec!["sigdesk", "-v", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_categories() {
        let args = vec!["sigdesk", "categories"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Categories));
    }
}
