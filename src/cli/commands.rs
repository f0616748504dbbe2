//! CLI command implementations
//!
//! `serve` boots in a fixed order: validate configuration, start the
//! runtime, connect the store, bind, serve. A failure at any step is fatal
//! and nothing is served.

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{init_tracing, Logger};
use crate::store;

use super::args::{Cli, Command, ServeArgs};
use super::errors::{CliError, CliResult};

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        let database_uri = args.resolved_uri();
        Self {
            host: args.host,
            port: args.port,
            database_uri,
        }
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    let result = match cmd {
        Command::Serve(args) => serve(args.into()),
    };

    if let Err(e) = &result {
        Logger::fatal(
            "BOOT_FAILED",
            &[("code", e.code_str()), ("error", e.message())],
        );
    }
    result
}

/// Connect to the store and serve HTTP until shutdown
pub fn serve(config: ServerConfig) -> CliResult<()> {
    config.validate()?;
    init_tracing();

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = store::connect(&config.database_uri).await?;
        Logger::info("STORE_CONNECTED", &[("database", store.name())]);

        HttpServer::new(config, store)
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))?;

        Ok::<(), CliError>(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;

    #[test]
    fn test_serve_rejects_blank_uri() {
        let err = serve(ServerConfig::new("")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_serve_rejects_unknown_store() {
        let err = serve(ServerConfig::new("mongodb://localhost/fruits")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_serve_fails_on_corrupt_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fruits.json");
        std::fs::write(&path, "[{").unwrap();

        let err = serve(ServerConfig::new(format!("file://{}", path.display()))).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::BootFailed);
    }

    #[test]
    fn test_args_into_config() {
        let args = ServeArgs {
            host: "127.0.0.1".to_string(),
            port: 4000,
            database_uri: None,
            mongodb_uri: Some("memory://".to_string()),
        };
        let config = ServerConfig::from(args);
        assert_eq!(config.socket_addr(), "127.0.0.1:4000");
        assert_eq!(config.database_uri, "memory://");
    }

    #[test]
    fn test_missing_uri_fails_validation() {
        let args = ServeArgs {
            host: "127.0.0.1".to_string(),
            port: 4000,
            database_uri: None,
            mongodb_uri: None,
        };
        let err = serve(ServerConfig::from(args)).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
