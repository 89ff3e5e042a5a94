//! Config subcommand handlers.

use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::{Input, Select};

use hostdesk_config::Profile;
use hostdesk_core::DEFAULT_API_URL;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color);

    match args.command {
        ConfigCommand::Init => {
            let config_path = hostdesk_config::config_path();
            let mut cfg = hostdesk_config::load_config_or_default();

            let (name, profile) = if global.yes || !std::io::stdin().is_terminal() {
                let name = config::active_profile_name(global, &cfg);
                (name, config::apply_overrides(Profile::default(), global))
            } else {
                eprintln!("hostdesk configuration wizard");
                eprintln!("   Config path: {}\n", config_path.display());
                wizard(global)?
            };

            profile
                .api_url
                .parse::<url::Url>()
                .map_err(|_| CliError::Validation {
                    field: "api_url".into(),
                    reason: format!("invalid URL: {}", profile.api_url),
                })?;

            cfg.profiles.insert(name.clone(), profile);
            cfg.default_profile = Some(name.clone());
            hostdesk_config::save_config(&cfg)?;

            output::success(
                &format!(
                    "Profile '{name}' written to {}",
                    config_path.display()
                ),
                global.quiet,
                color,
            );
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = hostdesk_config::load_config()?;
            let out = output::render_single(
                global.output,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("{e}")),
                |c| config::active_profile_name(global, c),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", hostdesk_config::config_path().display());
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = hostdesk_config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) && name != hostdesk_config::DEFAULT_PROFILE {
                return Err(hostdesk_config::ConfigError::UnknownProfile { name }.into());
            }

            cfg.default_profile = Some(name.clone());
            hostdesk_config::save_config(&cfg)?;
            output::success(&format!("Default profile set to '{name}'"), global.quiet, color);
            Ok(())
        }
    }
}

/// Interactive profile setup.
fn wizard(global: &GlobalOpts) -> Result<(String, Profile), CliError> {
    let name: String = Input::new()
        .with_prompt("Profile name")
        .default(
            global
                .profile
                .clone()
                .unwrap_or_else(|| hostdesk_config::DEFAULT_PROFILE.into()),
        )
        .interact_text()
        .map_err(prompt_err)?;

    let api_url: String = Input::new()
        .with_prompt("API URL")
        .default(global.api_url.clone().unwrap_or_else(|| DEFAULT_API_URL.into()))
        .interact_text()
        .map_err(prompt_err)?;

    let tls_choices = &[
        "System certificates (recommended)",
        "Custom CA certificate",
        "Accept any certificate (staging only)",
    ];
    let tls = Select::new()
        .with_prompt("TLS verification")
        .items(tls_choices)
        .default(usize::from(global.insecure) * 2)
        .interact()
        .map_err(prompt_err)?;

    let mut profile = Profile {
        api_url,
        timeout: global.timeout,
        ..Profile::default()
    };
    match tls {
        1 => {
            let path: String = Input::new()
                .with_prompt("CA certificate (PEM) path")
                .interact_text()
                .map_err(prompt_err)?;
            profile.ca_cert = Some(PathBuf::from(path));
        }
        2 => profile.insecure = Some(true),
        _ => {}
    }

    Ok((name, profile))
}
