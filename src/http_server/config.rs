//! HTTP Server Configuration
//!
//! Listen address and the record store connection string, read once at
//! startup.

use serde::{Deserialize, Serialize};

use crate::cli::{CliError, CliResult};

/// Port the server listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 3001;

/// Host the server binds unless told otherwise
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Record store connection URI, e.g. `file://./data/fruits.json`
    pub database_uri: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ServerConfig {
    /// Config with default host and port for the given store
    pub fn new(database_uri: impl Into<String>) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_uri: database_uri.into(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject values that cannot start a server
    pub fn validate(&self) -> CliResult<()> {
        if self.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }
        if self.database_uri.trim().is_empty() {
            return Err(CliError::config_error(
                "database URI must not be empty (set --database-uri or DATABASE_URI, or the older MONGODB_URI)",
            ));
        }
        Ok(())
    }
}
