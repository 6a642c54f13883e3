//! The interactive read-eval loop.
//!
//! One line is one command. Errors are printed and the loop continues; only
//! `quit`, end of input or Ctrl-C at the prompt end the session.

use std::io::{IsTerminal, Write};

use anyhow::Context;
use clap::error::ErrorKind;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::tokenize::split_line;
use crate::cli::{GlobalFlags, ShellLine};
use crate::commands::dispatch::{Flow, dispatch};
use crate::context::AppContext;

const BANNER: &str = "CrowdFix: report and track civic issues. Type `help` for commands.";

pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    if interactive && !flags.quiet {
        println!("{BANNER}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("{}", prompt(ctx));
            std::io::stdout().flush().context("failed to flush stdout")?;
        }

        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read from stdin")?,
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        match run_line(&line, ctx, flags).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(error) => eprintln!("error: {error:#}"),
        }
    }

    tracing::debug!("shell session ended");
    Ok(())
}

/// Tokenize, parse and dispatch a single line.
pub async fn run_line(
    line: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Flow> {
    let tokens = split_line(line)?;
    if tokens.is_empty() {
        return Ok(Flow::Continue);
    }

    let command = match ShellLine::parse_tokens(&tokens) {
        Ok(command) => command,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                    | ErrorKind::DisplayVersion
            ) =>
        {
            print!("{}", error.render());
            return Ok(Flow::Continue);
        }
        Err(error) => {
            let rendered = error.render().to_string();
            anyhow::bail!("{}", rendered.trim().trim_start_matches("error: "));
        }
    };

    dispatch(command, ctx, flags).await
}

fn prompt(ctx: &AppContext) -> String {
    let router = ctx.app.router();
    match router.session() {
        Some(session) => format!("{}@cfx:{}> ", session.label(), router.page()),
        None => format!("cfx:{}> ", router.page()),
    }
}

#[cfg(test)]
mod tests {
    use cfx_config::CfxConfig;
    use cfx_core::enums::{IssueStatus, Page};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: true,
            verbose: false,
        }
    }

    fn context() -> AppContext {
        AppContext::init(CfxConfig::default()).unwrap()
    }

    async fn run_all(ctx: &mut AppContext, lines: &[&str]) {
        for line in lines {
            let flow = run_line(line, ctx, &flags()).await;
            assert!(flow.is_ok(), "`{line}` failed: {flow:?}");
        }
    }

    #[tokio::test]
    async fn local_report_flow() {
        let mut ctx = context();
        run_all(
            &mut ctx,
            &[
                "login user@example.com secret",
                "report",
                "set category Pothole",
                r#"set description "road damage""#,
                "set address Main St",
                "locate 28.61 77.21",
                "submit",
                "list",
                "map",
            ],
        )
        .await;

        assert_eq!(ctx.app.router().page(), Page::View);
        let issues = ctx.app.store().list();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].description, "road damage");
        assert_eq!(issues[0].address.as_deref(), Some("Main St"));
        assert_eq!(issues[0].status, IssueStatus::Submitted);
        assert!(issues[0].geotag.is_some());
    }

    #[tokio::test]
    async fn errors_do_not_end_the_session() {
        let mut ctx = context();
        let flags = flags();
        assert!(run_line("report", &mut ctx, &flags).await.is_err());
        assert!(run_line("login", &mut ctx, &flags).await.is_err());
        assert!(run_line("fly away", &mut ctx, &flags).await.is_err());
        assert!(run_line("set description \"open", &mut ctx, &flags).await.is_err());
        assert_eq!(ctx.app.router().page(), Page::Auth);
    }

    #[tokio::test]
    async fn ai_commands_need_a_key() {
        let mut ctx = context();
        let flags = flags();
        run_all(&mut ctx, &["login a@b.c pw"]).await;
        let err = run_line("summarize", &mut ctx, &flags).await.unwrap_err();
        assert!(err.to_string().contains("CROWDFIX_AI__API_KEY"));
    }

    #[tokio::test]
    async fn help_blank_and_quit() {
        let mut ctx = context();
        let flags = flags();
        assert_eq!(run_line("help", &mut ctx, &flags).await.unwrap(), Flow::Continue);
        assert_eq!(run_line("   ", &mut ctx, &flags).await.unwrap(), Flow::Continue);
        assert_eq!(run_line("quit", &mut ctx, &flags).await.unwrap(), Flow::Quit);
    }

    #[tokio::test]
    async fn prompt_shows_user_and_page() {
        let mut ctx = context();
        assert_eq!(prompt(&ctx), "cfx:auth> ");
        run_all(&mut ctx, &["login user@example.com pw", "report"]).await;
        assert_eq!(prompt(&ctx), "user@example.com@cfx:report> ");
    }

    #[tokio::test]
    async fn upvote_unknown_id_is_not_an_error() {
        let mut ctx = context();
        run_all(&mut ctx, &["login a@b.c pw", "upvote iss-00000000", "status"]).await;
    }
}
