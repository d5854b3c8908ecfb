//! One-shot send: a single turn through the chat controller.

use anyhow::{Result, bail};
use std::io::{self, IsTerminal};

use super::chat::load_session_config;
use crate::chat::{ChatController, TerminalView, TurnOutcome, UiEvent};
use crate::client::LlmClient;
use crate::input::InputReader;

pub struct SendOptions {
    pub message: Option<String>,
    pub file: Option<String>,
    pub endpoint: Option<String>,
}

/// Sends one message and prints the reply.
///
/// Returns `Ok(false)` when the request failed; the error has already been
/// printed by the view.
pub async fn run_send(options: SendOptions) -> Result<bool> {
    let message = InputReader::read(options.message.as_deref(), options.file.as_deref())?;

    if message.trim().is_empty() {
        bail!("Message is empty");
    }

    let config = load_session_config(options.endpoint)?;
    let client = LlmClient::new(&config.endpoint);

    // Only echo the message when a person is watching; pipes get the reply alone
    let view = TerminalView::new(io::stdout().is_terminal());
    let mut controller = ChatController::new(view, client);
    controller.init();
    controller.set_input(message);

    match controller.handle_event(UiEvent::SendClick).await {
        TurnOutcome::Replied(_) => Ok(true),
        TurnOutcome::Failed(_) => Ok(false),
        TurnOutcome::Skipped => bail!("Message is empty"),
    }
}
