//! # llmchat - Terminal Chat Client
//!
//! `llmchat` talks to a chat backend that exposes a single `POST /llm`
//! endpoint taking `{"message": "..."}` and answering with plain text.
//!
//! ## Features
//!
//! - **Interactive chat**: one request/response turn per line, with a
//!   loading spinner while the backend thinks
//! - **Recoverable failures**: a failed request shows an error and the
//!   prompt comes back
//! - **One-shot mode**: `llmchat send` for scripts and pipes
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat with the default backend (http://localhost:8081)
//! llmchat
//!
//! # Chat with another backend
//! llmchat --endpoint https://chat.example.com
//!
//! # Send one message
//! llmchat send "Recommend an anime like Mushishi"
//! echo "hello" | llmchat send
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/llmchat/config.toml`:
//!
//! ```toml
//! [llmchat]
//! endpoint = "http://localhost:8081"
//! ```

/// Interactive chat: controller, views and the terminal session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// HTTP client for the `/llm` endpoint.
pub mod client;

/// Configuration file management and endpoint resolution.
pub mod config;

/// Message input from arguments, files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors) and logging setup.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
