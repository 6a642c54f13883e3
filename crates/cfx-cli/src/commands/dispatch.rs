use cfx_app::auth::SignupForm;
use cfx_core::enums::Page;

use crate::cli::{GlobalFlags, ShellCommand};
use crate::commands;
use crate::context::AppContext;

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Dispatch a parsed shell command to its handler.
pub async fn dispatch(
    command: ShellCommand,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Flow> {
    match command {
        ShellCommand::Login { email, password } => {
            commands::session::login(&email, &password, ctx, flags)?;
        }
        ShellCommand::Signup {
            username,
            email,
            password,
            confirm_password,
        } => {
            let form = SignupForm {
                username,
                email,
                password,
                confirm_password,
            };
            commands::session::signup(&form, ctx, flags).await?;
        }
        ShellCommand::Logout => commands::session::logout(ctx, flags),
        ShellCommand::View => commands::session::navigate(Page::View, ctx, flags)?,
        ShellCommand::Report => commands::session::navigate(Page::Report, ctx, flags)?,
        ShellCommand::Set { field, value } => {
            commands::report::set(&field, &value.join(" "), ctx, flags)?;
        }
        ShellCommand::Locate {
            latitude,
            longitude,
        } => commands::report::locate(latitude, longitude, ctx, flags)?,
        ShellCommand::Draft => commands::report::show_draft(ctx, flags)?,
        ShellCommand::Enhance => commands::report::enhance(ctx, flags).await?,
        ShellCommand::Submit => commands::report::submit(ctx, flags).await?,
        ShellCommand::List { limit } => commands::view::list(limit, ctx, flags)?,
        ShellCommand::Map => commands::view::map(ctx, flags)?,
        ShellCommand::Upvote { id } => commands::view::upvote(&id, ctx, flags)?,
        ShellCommand::Summarize => commands::view::summarize(ctx, flags).await?,
        ShellCommand::Complaint { id } => commands::view::complaint(&id, ctx, flags).await?,
        ShellCommand::Copy => commands::view::copy(ctx, flags)?,
        ShellCommand::Sync => commands::sync::handle(ctx, flags).await?,
        ShellCommand::Status => commands::status::handle(ctx, flags)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
