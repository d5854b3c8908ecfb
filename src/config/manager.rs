use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_ENDPOINT;
use crate::paths;

/// Settings in the `[llmchat]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmchatConfig {
    /// Base URL of the chat backend; `/llm` is appended.
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/llmchat/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub llmchat: LlmchatConfig,
}

/// Where the resolved endpoint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Cli,
    ConfigFile,
    Default,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The backend base URL.
    pub endpoint: Url,
    pub source: EndpointSource,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Endpoint override.
    pub endpoint: Option<String>,
}

/// Parses `endpoint` as an absolute http(s) URL with a host.
///
/// # Errors
///
/// Returns an error describing what is wrong with the value.
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).with_context(|| format!("Invalid endpoint '{endpoint}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("Invalid endpoint '{endpoint}': must start with http:// or https://");
    }
    if url.host_str().is_none_or(str::is_empty) {
        bail!("Invalid endpoint '{endpoint}': missing host");
    }

    Ok(url)
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over [`DEFAULT_ENDPOINT`].
///
/// # Errors
///
/// Returns an error if the chosen endpoint is not a valid http(s) URL.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let (endpoint, source) = if let Some(endpoint) = &options.endpoint {
        (endpoint.as_str(), EndpointSource::Cli)
    } else if let Some(endpoint) = &config_file.llmchat.endpoint {
        (endpoint.as_str(), EndpointSource::ConfigFile)
    } else {
        (DEFAULT_ENDPOINT, EndpointSource::Default)
    };

    let endpoint = parse_endpoint(endpoint).with_context(|| match source {
        EndpointSource::Cli => "Check the --endpoint option".to_string(),
        EndpointSource::ConfigFile => {
            "Check 'endpoint' in the config file, or run 'llmchat configure'".to_string()
        }
        EndpointSource::Default => "Built-in default endpoint is invalid".to_string(),
    })?;

    Ok(ResolvedConfig { endpoint, source })
}

/// Manages loading and saving configuration files.
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/llmchat/config.toml`
    /// or `~/.config/llmchat/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, or the defaults if there is none.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
