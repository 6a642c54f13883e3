use anyhow::Context;
use cfx_ai::cancel_pair;
use cfx_app::DraftField;
use cfx_core::enums::Page;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::cancel::until_ctrl_c;
use crate::context::{AI_MISSING, AppContext};
use crate::output::{notice, output, output_document};
use crate::progress::Progress;

/// Handle `set <field> <value...>`.
pub fn set(
    field: &str,
    value: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let field: DraftField = field.parse()?;
    ctx.app.set_field(field, value)?;
    notice(&format!("{field} set."), flags.format);
    Ok(())
}

/// Handle `locate <lat> <lng>`.
pub fn locate(
    latitude: f64,
    longitude: f64,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let geotag = ctx.app.locate(latitude, longitude)?;
    notice(
        &format!(
            "Location set to {:.4}, {:.4}.",
            geotag.latitude, geotag.longitude
        ),
        flags.format,
    );
    Ok(())
}

/// Handle `draft`.
pub fn show_draft(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.app.router().require_page(Page::Report)?;
    output(ctx.app.draft(), flags.format)
}

/// Handle `enhance`. Ctrl-C abandons the request and keeps the draft as is.
pub async fn enhance(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let AppContext { app, ai, .. } = ctx;
    let gateway = ai.as_ref().context(AI_MISSING)?;
    let (handle, token) = cancel_pair();
    let generator = gateway.with_cancel(token);

    let spinner = Progress::spinner("Enhancing description with AI...");
    match until_ctrl_c(&handle, app.enhance(&generator)).await {
        Ok(description) => {
            spinner.finish_clear();
            output_document("Enhanced description", description, flags.format)
        }
        Err(error) => {
            spinner.finish_err("Enhancement failed");
            Err(error.into())
        }
    }
}

/// Handle `submit`.
pub async fn submit(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = ctx
        .backend
        .as_ref()
        .map(|_| Progress::spinner("Submitting issue..."));
    let result = ctx.app.submit(ctx.backend.as_ref()).await;
    if let Some(spinner) = &spinner {
        spinner.finish_clear();
    }

    let response = result?;
    if flags.format == OutputFormat::Table {
        println!("{} ({})", response.message, response.issue.id);
        return Ok(());
    }
    output(&response, flags.format)
}
