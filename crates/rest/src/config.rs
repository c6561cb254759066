//! Server configuration for HAL services.
//!
//! Supports programmatic configuration, command line arguments and
//! environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HAL_SERVER_PORT` | 8080 | Server port |
//! | `HAL_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `HAL_LOG_LEVEL` | info | Log level |
//! | `HAL_BASE_URL` | http://localhost:8080 | Base URL used in links |
//! | `HAL_PRETTY_JSON` | false | Indent encoded documents |
//!
//! # Example
//!
//! ```rust
//! use hal_forms_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use clap::Parser;

/// Configuration for a server sending HAL resources.
#[derive(Debug, Clone, Parser)]
#[command(name = "hal-forms-server")]
#[command(about = "HAL and HAL-FORMS demonstration server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "HAL_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HAL_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "HAL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Base URL prefixed to generated links.
    #[arg(long, env = "HAL_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Write indented JSON.
    #[arg(long, env = "HAL_PRETTY_JSON", default_value = "false")]
    pub pretty_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            base_url: "http://localhost:8080".to_string(),
            pretty_json: false,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validates the configuration and returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.host.trim().is_empty() {
            errors.push("Host cannot be empty".to_string());
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            errors.push(format!(
                "Base URL must start with http:// or https://: {}",
                self.base_url
            ));
        }

        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            errors.push(format!("Unknown log level: {}", self.log_level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and indented output.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            base_url: "http://localhost:0".to_string(),
            pretty_json: true,
        }
    }
}
