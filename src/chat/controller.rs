//! The chat UI controller.
//!
//! Owns the input/send control state and runs one request/response turn:
//! user bubble, disabled controls, loading assistant bubble, backend call,
//! reply (or error) in the assistant bubble, controls back on.

use tracing::{debug, warn};

use super::view::{BubbleState, ChatView, MessageRole};
use crate::client::ChatBackend;

/// Control state owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub input_enabled: bool,
    pub send_enabled: bool,
    pub input_value: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input_enabled: true,
            send_enabled: true,
            input_value: String::new(),
        }
    }
}

/// Whether a turn is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
}

/// A key observed on the input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// Events the controller is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The send control was activated.
    SendClick,
    /// A key was pressed while the input control had focus.
    KeyPress(Key),
}

/// What one send action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing happened: blank input, disabled controls, or an unbound event.
    Skipped,
    /// The backend answered; holds the trimmed reply.
    Replied(String),
    /// The request failed; holds the text shown in the assistant bubble.
    Failed(String),
}

impl TurnOutcome {
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Drives a [`ChatView`] from user events and a [`ChatBackend`].
#[derive(Debug)]
pub struct ChatController<V, B> {
    view: V,
    backend: B,
    state: UiState,
    phase: Phase,
}

impl<V: ChatView, B: ChatBackend> ChatController<V, B> {
    pub fn new(view: V, backend: B) -> Self {
        Self {
            view,
            backend,
            state: UiState::default(),
            phase: Phase::Idle,
        }
    }

    /// Enables both controls and focuses the input.
    pub fn init(&mut self) {
        self.set_controls_enabled(true);
        self.view.focus_input();
    }

    pub const fn state(&self) -> &UiState {
        &self.state
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Replaces the input control's value, as typing would.
    ///
    /// Has no effect while the input is disabled.
    pub fn set_input(&mut self, value: impl Into<String>) {
        if !self.state.input_enabled {
            return;
        }
        self.state.input_value = value.into();
        self.view.set_input_value(&self.state.input_value);
    }

    /// Dispatches a bound event. Click and Enter both send.
    pub async fn handle_event(&mut self, event: UiEvent) -> TurnOutcome {
        match event {
            UiEvent::SendClick | UiEvent::KeyPress(Key::Enter) => self.send().await,
            UiEvent::KeyPress(_) => TurnOutcome::Skipped,
        }
    }

    /// Runs one turn with the current input value.
    pub async fn send(&mut self) -> TurnOutcome {
        if !self.state.send_enabled || self.phase == Phase::AwaitingResponse {
            return TurnOutcome::Skipped;
        }
        if self.state.input_value.trim().is_empty() {
            return TurnOutcome::Skipped;
        }

        let message = std::mem::take(&mut self.state.input_value);
        self.view.set_input_value("");
        debug!(text = %message, "user");

        self.view
            .append_bubble(MessageRole::User, &message, BubbleState::Ready);

        self.set_controls_enabled(false);
        self.phase = Phase::AwaitingResponse;

        let reply_id = self
            .view
            .append_bubble(MessageRole::Assistant, "", BubbleState::Loading);

        let outcome = match self.backend.send(&message).await {
            Ok(body) => {
                let reply = body.trim();
                debug!(text = %reply, "assistant");
                self.view.update_bubble(reply_id, reply, BubbleState::Ready);
                TurnOutcome::Replied(reply.to_string())
            }
            Err(err) => {
                let text = err.to_string();
                warn!(error = %text, "chat request failed");
                self.view.update_bubble(reply_id, &text, BubbleState::Error);
                TurnOutcome::Failed(text)
            }
        };

        self.phase = Phase::Idle;
        self.set_controls_enabled(true);
        self.view.focus_input();

        outcome
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.state.send_enabled = enabled;
        self.state.input_enabled = enabled;
        self.view.set_send_enabled(enabled);
        self.view.set_input_enabled(enabled);
    }
}
