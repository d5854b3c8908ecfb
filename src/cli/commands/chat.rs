use anyhow::Result;
use tracing::info;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatOptions {
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(options.endpoint)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

/// Resolves the endpoint from the CLI override, the config file and the
/// built-in default.
pub fn load_session_config(endpoint: Option<String>) -> Result<SessionConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let resolved = resolve_config(&ResolveOptions { endpoint }, &file_config)?;
    info!(endpoint = %resolved.endpoint, source = ?resolved.source, "endpoint resolved");

    let config_path = manager
        .exists()
        .then(|| manager.config_path().to_path_buf());

    Ok(SessionConfig::new(resolved.endpoint, config_path))
}
