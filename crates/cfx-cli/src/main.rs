use anyhow::Context;
use clap::Parser;

mod cli;
mod clipboard;
mod commands;
mod context;
mod output;
mod progress;
mod shell;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("cfx error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config =
        cfx_config::CfxConfig::load_with_dotenv().context("failed to load configuration")?;
    context::warn_unconfigured(&config);

    let mut ctx = context::AppContext::init(config)
        .context("failed to initialize crowdfix application context")?;

    shell::run(&mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CROWDFIX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
