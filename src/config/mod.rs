//! Configuration file management and endpoint resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, EndpointSource, LlmchatConfig, ResolveOptions, ResolvedConfig,
    parse_endpoint, resolve_config,
};
