use anyhow::Context;
use cfx_ai::cancel_pair;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::clipboard;
use crate::commands::shared::cancel::until_ctrl_c;
use crate::commands::shared::limit::effective_limit;
use crate::context::{AI_MISSING, AppContext};
use crate::output::{notice, output, output_document};
use crate::progress::Progress;

/// Handle `list [--limit N]`.
pub fn list(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let issues = ctx.app.list(Some(limit))?;
    output(&issues, flags.format)?;
    let hidden = ctx.app.store().len().saturating_sub(issues.len());
    if hidden > 0 {
        notice(
            &format!("({hidden} more; use `list --limit N` to show them)"),
            flags.format,
        );
    }
    Ok(())
}

/// Handle `map`.
pub fn map(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = ctx.app.map_view()?;
    if flags.format != OutputFormat::Table {
        return output(&view, flags.format);
    }

    println!(
        "Map centred on {:.4}, {:.4}",
        view.center.latitude, view.center.longitude
    );
    output(&view.markers, flags.format)?;
    if view.omitted > 0 {
        println!("{} issue(s) without a location are not shown.", view.omitted);
    }
    Ok(())
}

/// Handle `upvote <id>`.
pub fn upvote(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.app.upvote(id)?;
    match (flags.format, response.upvotes) {
        (OutputFormat::Table, Some(upvotes)) => println!("Upvoted {id} ({upvotes})."),
        (OutputFormat::Table, None) => println!("No issue with id {id}."),
        _ => output(&response, flags.format)?,
    }
    Ok(())
}

/// Handle `summarize`.
pub async fn summarize(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let AppContext { app, ai, .. } = ctx;
    let gateway = ai.as_ref().context(AI_MISSING)?;
    let (handle, token) = cancel_pair();
    let generator = gateway.with_cancel(token);

    let spinner = Progress::spinner("Summarizing issues with AI...");
    let result = until_ctrl_c(&handle, app.summarize(&generator)).await;
    spinner.finish_clear();
    let overlay = result?;
    output_document(&overlay.title, &overlay.content, flags.format)
}

/// Handle `complaint <id>`.
pub async fn complaint(
    id: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let AppContext { app, ai, .. } = ctx;
    let gateway = ai.as_ref().context(AI_MISSING)?;
    let (handle, token) = cancel_pair();
    let generator = gateway.with_cancel(token);

    let spinner = Progress::spinner("Drafting complaint with AI...");
    let result = until_ctrl_c(&handle, app.draft_complaint(id, &generator)).await;
    spinner.finish_clear();
    let overlay = result?;
    output_document(&overlay.title, &overlay.content, flags.format)
}

/// Handle `copy`: put the last AI result on the terminal clipboard.
pub fn copy(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let overlay = ctx
        .app
        .overlay()
        .context("nothing to copy yet. Run `summarize` or `complaint <id>` first.")?;
    clipboard::copy_to(&mut std::io::stdout().lock(), &overlay.content)
        .context("failed to write clipboard sequence")?;
    notice("Copied to clipboard!", flags.format);
    Ok(())
}
