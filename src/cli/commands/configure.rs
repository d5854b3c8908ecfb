//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{CustomUserError, Text};
use inquire::validator::Validation;

use crate::client::{DEFAULT_ENDPOINT, llm_url};
use crate::config::{ConfigFile, ConfigManager, parse_endpoint};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings. Otherwise asks for the
/// backend endpoint and saves it.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_current_settings(&manager, &config);
        return Ok(());
    }
    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current_settings(manager, &config);

    let current = config
        .llmchat
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let endpoint = Text::new("Chat endpoint:")
        .with_default(&current)
        .with_help_message("Base URL of the backend; /llm is appended")
        .with_validator(endpoint_validator)
        .prompt()?;

    config.llmchat.endpoint = Some(endpoint.trim().to_string());
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn endpoint_validator(input: &str) -> Result<Validation, CustomUserError> {
    Ok(match parse_endpoint(input.trim()) {
        Ok(_) => Validation::Valid,
        Err(e) => Validation::Invalid(format!("{e:#}").into()),
    })
}

fn print_current_settings(manager: &ConfigManager, config: &ConfigFile) {
    println!("{}", Style::header("Current settings"));
    match config.llmchat.endpoint.as_deref() {
        Some(endpoint) => {
            println!(
                "  {}  {}",
                Style::label("endpoint"),
                Style::value(endpoint)
            );
            let url = parse_endpoint(endpoint).map_or_else(
                |_| Style::error("(invalid endpoint)"),
                |endpoint| Style::secondary(llm_url(&endpoint)),
            );
            println!("  {}       {}", Style::label("url"), url);
        }
        None => {
            println!(
                "  {}  {} {}",
                Style::label("endpoint"),
                Style::secondary("(not set)"),
                Style::hint(format!("default: {DEFAULT_ENDPOINT}"))
            );
        }
    }
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}
