//! Global output configuration and logging setup.
//!
//! Controls quiet mode and colors for everything llmchat prints, and
//! installs the `tracing` subscriber used for diagnostics.
//!
//! - Assistant replies go to stdout
//! - Spinners, logs and errors go to stderr
//! - Quiet mode hides the banner and the spinner
//! - Colors can be disabled via flag or `NO_COLOR` environment variable

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "LLMCHAT_LOG";

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
    /// Log debug diagnostics to stderr.
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var_os("NO_COLOR").is_some(),
            verbose: false,
        }
    }
}

impl OutputConfig {
    /// Filter used when `LLMCHAT_LOG` is not set.
    pub const fn default_filter(&self) -> &'static str {
        if self.verbose { "llmchat_cli=debug" } else { "warn" }
    }
}

/// Initialize the global output configuration and the log subscriber.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(!config.no_color)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();

    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}
