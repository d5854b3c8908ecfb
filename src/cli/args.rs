use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "llmchat")]
#[command(about = "Terminal chat client for an LLM backend")]
#[command(version)]
pub struct Args {
    /// Backend base URL (the /llm path is appended)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Hide the banner and the loading spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log request details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat (the default when no subcommand is given)
    Chat,
    /// Send a single message and print the reply
    Send {
        /// Message to send (reads --file or stdin if not provided)
        #[arg(conflicts_with = "file")]
        message: Option<String>,

        /// Read the message from a file
        #[arg(short = 'f', long)]
        file: Option<String>,
    },
    /// Configure llmchat settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
