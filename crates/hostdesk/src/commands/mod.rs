//! Command handlers, one module per top-level command.

pub mod config_cmd;
pub mod customers;
pub mod industries;
pub mod services;
pub mod session;
pub mod util;

use hostdesk_core::Console;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a network-backed command to its handler.
pub async fn dispatch(cmd: Command, console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Industries(args) => industries::handle(console, args, global).await,
        Command::Services(args) => services::handle(console, args, global).await,
        Command::Customers(args) => customers::handle(console, args, global).await,
        Command::Session(_) | Command::Config(_) | Command::Completions(_) => Err(
            CliError::Internal("local command routed to the network dispatcher".into()),
        ),
    }
}
