//! Renders chat bubbles to the terminal.

use std::io::{self, IsTerminal, Write};

use super::ui;
use super::view::{BubbleId, BubbleState, ChatView, MessageRole, Transcript};
use crate::ui::Spinner;

const LOADING_MESSAGE: &str = "Thinking...";

/// Bubbles kept after they have been printed. Nothing reads them back once
/// on screen; the tail is kept for `/clear` and debugging.
const HISTORY_LIMIT: usize = 32;

/// A [`ChatView`] that keeps a bounded [`Transcript`] and prints bubbles as
/// they settle.
///
/// A loading bubble is a spinner; the reply is printed once the bubble
/// leaves the loading state.
pub struct TerminalView {
    transcript: Transcript,
    spinner: Option<Spinner>,
    echo_user: bool,
}

impl TerminalView {
    /// Creates a view.
    ///
    /// With `echo_user` set, user bubbles are printed too. Interactive
    /// sessions leave it off because the prompt already shows the line.
    pub fn new(echo_user: bool) -> Self {
        Self {
            transcript: Transcript::bounded(HISTORY_LIMIT),
            spinner: None,
            echo_user,
        }
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn render(&mut self, role: MessageRole, text: &str, state: BubbleState) {
        match (role, state) {
            (_, BubbleState::Loading) => {
                self.spinner = Some(Spinner::new(LOADING_MESSAGE));
            }
            (MessageRole::User, _) => {
                if self.echo_user {
                    ui::print_user_message(text);
                }
            }
            (MessageRole::Assistant, BubbleState::Ready) => {
                self.stop_spinner();
                ui::print_assistant_message(text);
            }
            (MessageRole::Assistant, BubbleState::Error) => {
                self.stop_spinner();
                ui::print_error(text);
            }
        }
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop();
        }
    }
}

impl ChatView for TerminalView {
    fn append_bubble(&mut self, role: MessageRole, text: &str, state: BubbleState) -> BubbleId {
        let id = self.transcript.append_bubble(role, text, state);
        self.render(role, text, state);
        id
    }

    fn update_bubble(&mut self, id: BubbleId, text: &str, state: BubbleState) {
        let Some(role) = self.transcript.bubble(id).map(|b| b.role) else {
            return;
        };
        self.transcript.update_bubble(id, text, state);
        self.render(role, text, state);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.transcript.set_input_enabled(enabled);
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.transcript.set_send_enabled(enabled);
    }

    fn set_input_value(&mut self, value: &str) {
        self.transcript.set_input_value(value);
    }

    fn focus_input(&mut self) {
        self.transcript.focus_input();
    }

    fn clear(&mut self) {
        self.stop_spinner();
        self.transcript.clear();

        let mut stdout = io::stdout();
        if stdout.is_terminal() {
            // Clear screen, cursor home
            let _ = write!(stdout, "\x1B[2J\x1B[1;1H");
            let _ = stdout.flush();
        }
    }
}
