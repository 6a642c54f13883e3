use cfx_app::auth::{LoginForm, SignupForm};
use cfx_core::enums::Page;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::Progress;

/// Handle `login <email> <password>`.
pub fn login(
    email: &str,
    password: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.app.login(&LoginForm::new(email, password))?;
    let message = format!("Logged in as {}.", session.label());
    report_session(&message, ctx, flags)
}

/// Handle `signup <username> <email> <password> <confirm>`.
pub async fn signup(
    form: &SignupForm,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let spinner = ctx
        .backend
        .as_ref()
        .map(|_| Progress::spinner("Creating account..."));
    let result = ctx.app.signup(form, ctx.backend.as_ref()).await;
    if let Some(spinner) = &spinner {
        spinner.finish_clear();
    }
    let message = result?;
    report_session(&message, ctx, flags)
}

/// Handle `logout`.
pub fn logout(ctx: &mut AppContext, flags: &GlobalFlags) {
    ctx.app.logout();
    notice("Logged out.", flags.format);
}

/// Handle `view` and `report`.
pub fn navigate(to: Page, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.app.navigate(to)? {
        notice(&format!("Now on the {to} page."), flags.format);
    }
    Ok(())
}

fn report_session(message: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            println!("{message}");
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(
            &ctx.app.status(ctx.ai.is_some(), ctx.backend.is_some()),
            flags.format,
        ),
    }
}
