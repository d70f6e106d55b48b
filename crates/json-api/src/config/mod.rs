//! Server configuration module

use clap::Parser;

use crate::config::{db::DatabaseConfig, observability::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Storefront CMS JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "cms-json", about = "Storefront CMS JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn explicit_arguments_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "cms-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--database-url",
            "postgres://localhost/cms",
            "--log-format",
            "json",
            "--slow-request-threshold-ms",
            "250",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000", "socket address");
        assert_eq!(config.database.database_url, "postgres://localhost/cms", "database url");
        assert!(
            matches!(config.logging.log_format, observability::LogFormat::Json),
            "log format"
        );
        assert_eq!(config.logging.slow_request_threshold_ms, 250, "slow threshold");

        Ok(())
    }
}
