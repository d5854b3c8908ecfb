//! Interactive chat mode.
//!
//! The controller runs request/response turns against a [`ChatView`]; the
//! session wires it to a terminal prompt with slash commands.

/// Slash command parsing and autocomplete.
pub mod command;
pub mod controller;
mod session;
pub mod terminal;
mod ui;
pub mod view;

pub use controller::{ChatController, Key, Phase, TurnOutcome, UiEvent, UiState};
pub use session::{ChatSession, SessionConfig};
pub use terminal::TerminalView;
pub use view::{Bubble, BubbleId, BubbleState, ChatView, MessageRole, Transcript};
