use anyhow::Result;
use clap::Parser;

use llmchat_cli::cli::commands::{chat, configure, send};
use llmchat_cli::cli::{Args, Command};
use llmchat_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || defaults.no_color,
        verbose: args.verbose,
    });

    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Send { message, file }) => {
            let options = send::SendOptions {
                message,
                file,
                endpoint: args.endpoint,
            };
            if !send::run_send(options).await? {
                std::process::exit(exitcode::UNAVAILABLE);
            }
        }
        Some(Command::Chat) | None => {
            let options = chat::ChatOptions {
                endpoint: args.endpoint,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
