use clap::ValueEnum;

/// Output mode shared by every shell command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Startup flags that apply for the whole session.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
}
