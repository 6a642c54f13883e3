use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::{AppContext, BACKEND_MISSING};
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct SyncResponse {
    imported: usize,
    total: usize,
}

/// Handle `sync`: import the backend's issues into the local store.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let backend = ctx.backend.as_ref().context(BACKEND_MISSING)?;

    let spinner = Progress::spinner("Fetching issues from backend...");
    let remote = match backend.list_issues().await {
        Ok(remote) => remote,
        Err(error) => {
            spinner.finish_err("Sync failed");
            return Err(error).context("failed to list backend issues");
        }
    };
    let imported = ctx.app.import(remote)?;
    spinner.finish_ok(&format!("Imported {imported} issue(s)"));

    output(
        &SyncResponse {
            imported,
            total: ctx.app.store().len(),
        },
        flags.format,
    )
}
