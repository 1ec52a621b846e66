//! Server configuration for the patient record API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VITALS_PORT` | 8080 | Server port |
//! | `VITALS_HOST` | 127.0.0.1 | Host to bind |
//! | `VITALS_LOG_LEVEL` | info | Log level |
//! | `VITALS_JSON_LOGS` | false | Emit logs as JSON lines |
//! | `VITALS_DATA_FILE` | pat.json | Backing JSON file |
//! | `VITALS_CREATE_IF_MISSING` | true | Create an empty data file at startup |
//! | `VITALS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `VITALS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `VITALS_ENABLE_CORS` | true | Enable CORS |
//! | `VITALS_CORS_ORIGINS` | * | Allowed origins |
//! | `VITALS_ENABLE_REQUEST_ID` | true | Set and propagate `x-request-id` |
//! | `VITALS_DEFAULT_PAGE_SIZE` | 10 | Default `limit` for /pagination and /search |
//! | `VITALS_MAX_SEARCH_LIMIT` | 50 | Largest `limit` accepted by /search |
//!
//! # Example
//!
//! ```rust
//! use vitals_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     data_file: "/var/lib/vitals/pat.json".into(),
//!     ..Default::default()
//! };
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Server configuration for the patient record API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "vitals")]
#[command(about = "Patient record HTTP API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "VITALS_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "VITALS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "VITALS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, env = "VITALS_JSON_LOGS", default_value = "false", action = ArgAction::Set)]
    pub json_logs: bool,

    /// Path of the JSON file holding the patient collection.
    #[arg(short, long, env = "VITALS_DATA_FILE", default_value = "pat.json")]
    pub data_file: PathBuf,

    /// Create an empty data file at startup if none exists.
    #[arg(long, env = "VITALS_CREATE_IF_MISSING", default_value = "true", action = ArgAction::Set)]
    pub create_if_missing: bool,

    /// Maximum request body size in bytes.
    #[arg(long, env = "VITALS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "VITALS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "VITALS_ENABLE_CORS", default_value = "true", action = ArgAction::Set)]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "VITALS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Enable request ID tracking.
    #[arg(long, env = "VITALS_ENABLE_REQUEST_ID", default_value = "true", action = ArgAction::Set)]
    pub enable_request_id: bool,

    /// Default page size for /pagination and default limit for /search.
    #[arg(long, env = "VITALS_DEFAULT_PAGE_SIZE", default_value = "10")]
    pub default_page_size: usize,

    /// Largest limit accepted by /search.
    #[arg(long, env = "VITALS_MAX_SEARCH_LIMIT", default_value = "50")]
    pub max_search_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            data_file: PathBuf::from("pat.json"),
            create_if_missing: true,
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            enable_request_id: true,
            default_page_size: 10,
            max_search_limit: 50,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["vitals"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.data_file.as_os_str().is_empty() {
            errors.push("Data file path cannot be empty".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.max_search_limit == 0 {
            errors.push("Max search limit cannot be 0".to_string());
        }

        if self.default_page_size > self.max_search_limit {
            errors.push("Default page size cannot exceed max search limit".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            data_file: PathBuf::from("test-pat.json"),
            create_if_missing: false,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            enable_request_id: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.data_file, PathBuf::from("pat.json"));
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_search_limit, 50);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_defaults_match_clap_defaults() {
        let parsed = ServerConfig::try_parse_from(["vitals"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.max_body_size, default.max_body_size);
        assert_eq!(parsed.default_page_size, default.default_page_size);
        assert_eq!(parsed.create_if_missing, default.create_if_missing);
    }

    #[test]
    fn test_parse_flags() {
        let config = ServerConfig::try_parse_from([
            "vitals",
            "--port",
            "9000",
            "--data-file",
            "/tmp/records.json",
            "--json-logs",
            "true",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_file, PathBuf::from("/tmp/records.json"));
        assert!(config.json_logs);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let config = ServerConfig {
            default_page_size: 100,
            max_search_limit: 50,
            request_timeout: 0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert!(!config.create_if_missing);
    }
}
