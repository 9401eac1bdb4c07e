//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Base used to build short URLs (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Length of generated short codes (default: 6, range 4-32)
//! - `PURGE_INTERVAL_SECONDS` - Expired-mapping sweep period (default: 300,
//!   `0` disables the sweep)
//! - `POLICY_DENYLIST` - Comma-separated terms rejected in URLs and custom
//!   codes (unset or empty disables the content policy)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Base URL embedded in returned short links. The service never derives
    /// it from request headers.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of generated short codes.
    pub code_length: usize,
    /// Period of the expired-mapping sweep. `0` disables the sweep; expiry
    /// checks at resolve time do not depend on it.
    pub purge_interval_seconds: u64,
    /// Comma-separated deny list for the content policy, if configured.
    pub policy_denylist: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6);

        let purge_interval_seconds = env::var("PURGE_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let policy_denylist = env::var("POLICY_DENYLIST")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_length,
            purge_interval_seconds,
            policy_denylist,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `code_length` is outside 4-32
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Code length: {}", self.code_length);

        if self.purge_interval_seconds == 0 {
            tracing::info!("  Purge sweep: disabled");
        } else {
            tracing::info!("  Purge sweep: every {}s", self.purge_interval_seconds);
        }

        match &self.policy_denylist {
            Some(csv) => tracing::info!(
                "  Content policy: deny list ({} terms)",
                csv.split(',').filter(|t| !t.trim().is_empty()).count()
            ),
            None => tracing::info!("  Content policy: disabled"),
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
