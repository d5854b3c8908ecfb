//! Chat mode UI components.

use crate::output;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    if output::is_quiet() {
        return;
    }
    println!(
        "{} {} - connected to {}",
        Style::header("llmchat"),
        Style::version(format!("v{VERSION}")),
        Style::value(&config.endpoint)
    );
    println!(
        "{}",
        Style::hint("Type a message and press Enter, /help for commands, Ctrl+C to quit")
    );
    println!();
}

pub fn print_goodbye() {
    if output::is_quiet() {
        return;
    }
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint)
    );
    println!(
        "  {}        {}",
        Style::label("url"),
        Style::secondary(&config.url)
    );
    if let Some(path) = &config.config_path {
        println!(
            "  {}       {}",
            Style::label("file"),
            Style::secondary(path.display())
        );
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}   {}",
        Style::command("/clear"),
        Style::secondary("Clear the screen")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

pub fn print_user_message(text: &str) {
    println!("{} {text}", Style::user_marker("❯"));
}

pub fn print_assistant_message(text: &str) {
    if text.is_empty() {
        println!("{}", Style::hint("(empty reply)"));
    } else {
        println!("{text}");
    }
    println!();
}
