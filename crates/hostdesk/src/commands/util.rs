//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;

use hostdesk_core::Console;

use crate::cli::GlobalOpts;
use crate::error::CliError;

const TICK: Duration = Duration::from_millis(90);

/// Await a console call, with a spinner on stderr whenever the store
/// reports loading.
///
/// The spinner follows the store's status channel rather than the future
/// itself, so it also reflects any other operation in flight.
pub async fn with_spinner<T>(
    console: &Console,
    global: &GlobalOpts,
    message: &str,
    fut: impl Future<Output = T>,
) -> T {
    let spinner = if !global.quiet && std::io::stderr().is_terminal() {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_owned());
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut status = console.store().subscribe_status();
    if status.borrow_and_update().loading {
        spinner.enable_steady_tick(TICK);
    }

    tokio::pin!(fut);
    let out = loop {
        tokio::select! {
            out = &mut fut => break out,
            changed = status.changed() => {
                if changed.is_err() {
                    break fut.await;
                }
                if status.borrow_and_update().loading {
                    spinner.enable_steady_tick(TICK);
                } else {
                    spinner.disable_steady_tick();
                }
            }
        }
    };
    spinner.finish_and_clear();
    out
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractive {
            action: message.to_owned(),
        });
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid JSON in {}: {e}", path.display()),
    })
}
