//! Grammar for one line typed at the `cfx` prompt.

use clap::{Parser, Subcommand};

/// A parsed shell line. Parsed with `no_binary_name`, so the first token is
/// the command itself.
#[derive(Debug, Parser)]
#[command(
    name = "cfx",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Log in with an email and password
    Login {
        #[arg(default_value = "")]
        email: String,
        #[arg(default_value = "")]
        password: String,
    },

    /// Create an account and log in
    Signup {
        #[arg(default_value = "")]
        username: String,
        #[arg(default_value = "")]
        email: String,
        #[arg(default_value = "")]
        password: String,
        #[arg(default_value = "")]
        confirm_password: String,
    },

    /// Log out and return to the auth page
    Logout,

    /// Switch to the issue list / map page
    View,

    /// Switch to the report page
    Report,

    /// Set a report field: category, description or address
    Set {
        field: String,
        /// Words are joined with single spaces; quote to keep spacing
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Attach a geotag to the report
    #[command(allow_negative_numbers = true)]
    Locate { latitude: f64, longitude: f64 },

    /// Show the report being composed
    Draft,

    /// Rewrite the report description with AI
    Enhance,

    /// Submit the report
    Submit,

    /// List issues, most upvoted first
    List {
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show geotagged issues as map markers
    Map,

    /// Upvote an issue
    Upvote { id: String },

    /// Summarize all issues with AI
    Summarize,

    /// Draft a complaint email for one issue with AI
    Complaint { id: String },

    /// Copy the last AI result to the terminal clipboard
    Copy,

    /// Import issues from the backend
    Sync,

    /// Show session and configuration status
    Status,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl ShellLine {
    /// Parse pre-split tokens.
    ///
    /// # Errors
    ///
    /// Returns the clap error, which also covers `help` and `--help` output.
    pub fn parse_tokens<I, T>(tokens: I) -> Result<ShellCommand, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(tokens).map(|line| line.command)
    }
}
