//! Session command handlers.
//!
//! The session is local state only: no request is sent to the API.

use hostdesk_core::{SessionUser, UserKind, validate_email};

use crate::cli::{GlobalOpts, SessionArgs, SessionCommand, UserKindArg};
use crate::error::CliError;
use crate::output;

fn detail(user: &SessionUser) -> String {
    let dashboard = user.dashboard();
    format!(
        "Name:      {}\nEmail:     {}\nKind:      {}\nDashboard: {dashboard} ({})",
        user.name,
        user.email,
        user.kind,
        dashboard.route()
    )
}

pub fn handle(args: SessionArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color);

    match args.command {
        SessionCommand::Show => {
            let user = hostdesk_config::load_session()?.ok_or(CliError::NoSession)?;
            let out = output::render_single(global.output, &user, detail, |u| u.email.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SessionCommand::Set { email, name, kind } => {
            let email = email.trim().to_owned();
            validate_email(&email)?;
            let kind = match kind {
                UserKindArg::Admin => UserKind::Admin,
                UserKindArg::Client => UserKind::Client,
            };
            let user = SessionUser::new(email, name.trim(), kind);
            hostdesk_config::save_session(&user)?;
            output::success(
                &format!("Signed in as {} ({})", user.email, user.dashboard()),
                global.quiet,
                color,
            );
            Ok(())
        }

        SessionCommand::Clear => {
            if hostdesk_config::clear_session()? {
                output::success("Signed out", global.quiet, color);
            } else if !global.quiet {
                eprintln!("Nobody was signed in");
            }
            Ok(())
        }
    }
}
