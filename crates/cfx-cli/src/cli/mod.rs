use clap::Parser;

pub mod global;
pub mod shell_commands;
pub mod tokenize;

pub use global::{GlobalFlags, OutputFormat};
pub use shell_commands::{ShellCommand, ShellLine};

/// Startup parser for the `cfx` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cfx",
    version,
    about = "CrowdFix - report and track civic issues from the terminal"
)]
pub struct Cli {
    /// Output format: json, table, raw
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Default max rows for `list`
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only in logs, no spinners)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_table_output() {
        let cli = Cli::try_parse_from(["cfx"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, None);
        assert!(!cli.quiet);
    }

    #[test]
    fn startup_flags_parse() {
        let cli = Cli::try_parse_from(["cfx", "--format", "json", "--limit", "5", "--verbose"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Json);
        assert_eq!(flags.limit, Some(5));
        assert!(flags.verbose);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["cfx", "--format", "xml"]).is_err());
    }
}
