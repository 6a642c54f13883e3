use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `status`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx
        .app
        .status(ctx.ai.is_some(), ctx.backend.is_some());
    output(&status, flags.format)
}
