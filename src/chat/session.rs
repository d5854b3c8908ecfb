use anyhow::Result;
use reqwest::Url;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::PathBuf;
use tracing::debug;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::{ChatController, Key, TurnOutcome, UiEvent};
use super::terminal::TerminalView;
use super::ui;
use super::view::ChatView;
use crate::client::{LlmClient, llm_url};
use crate::ui::is_prompt_cancelled;

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The backend base URL.
    pub endpoint: Url,
    /// The full URL messages are posted to.
    pub url: Url,
    /// The config file in use, if one exists.
    pub config_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Creates a new session configuration.
    pub fn new(endpoint: Url, config_path: Option<PathBuf>) -> Self {
        let url = llm_url(&endpoint);
        Self {
            endpoint,
            url,
            config_path,
        }
    }
}

/// An interactive chat session.
///
/// Provides a REPL-style interface: every line that is not a slash command
/// becomes the input value and is sent as if Enter was pressed.
pub struct ChatSession {
    config: SessionConfig,
    controller: ChatController<TerminalView, LlmClient>,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = LlmClient::new(&config.endpoint);
        // The prompt already shows what the user typed
        let controller = ChatController::new(TerminalView::new(false), client);
        Self { config, controller }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);
        self.controller.init();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Message(text) => {
                        self.submit(text).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Types `text` into the input and presses Enter.
    async fn submit(&mut self, text: String) -> TurnOutcome {
        self.controller.set_input(text);
        let outcome = self
            .controller
            .handle_event(UiEvent::KeyPress(Key::Enter))
            .await;
        debug!(?outcome, "turn finished");
        outcome
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Clear => {
                self.controller.view_mut().clear();
                true
            }
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }
}
