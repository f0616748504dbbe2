//! CLI argument definitions using clap
//!
//! Commands:
//! - fruitstand serve [--host <host>] [--port <port>] --database-uri <uri>
//!
//! `--mongodb-uri` / `MONGODB_URI` is still read when the newer name is unset.

use clap::{Args, Parser, Subcommand};

use crate::http_server::config::{DEFAULT_HOST, DEFAULT_PORT};

/// fruitstand - manage a collection of fruits from the browser
#[derive(Parser, Debug)]
#[command(name = "fruitstand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the record store and serve the fruit pages
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Record store URI: `memory://<name>` or `file://<path>`
    #[arg(long, env = "DATABASE_URI")]
    pub database_uri: Option<String>,

    /// Older name for the record store URI
    #[arg(long, env = "MONGODB_URI", hide = true)]
    pub mongodb_uri: Option<String>,
}

impl ServeArgs {
    /// Connection string, preferring `DATABASE_URI` over `MONGODB_URI`.
    /// Empty when neither is set so config validation reports it.
    pub fn resolved_uri(&self) -> String {
        self.database_uri
            .clone()
            .or_else(|| self.mongodb_uri.clone())
            .unwrap_or_default()
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from([
            "fruitstand",
            "serve",
            "--database-uri",
            "memory://fruits",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 3001);
        assert_eq!(args.resolved_uri(), "memory://fruits");
    }

    #[test]
    fn test_serve_accepts_mongodb_uri_flag() {
        let cli = Cli::try_parse_from([
            "fruitstand",
            "serve",
            "--mongodb-uri",
            "file://./legacy.json",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.resolved_uri(), "file://./legacy.json");
    }

    #[test]
    fn test_database_uri_wins_over_mongodb_uri() {
        let cli = Cli::try_parse_from([
            "fruitstand",
            "serve",
            "--database-uri",
            "memory://current",
            "--mongodb-uri",
            "memory://legacy",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.resolved_uri(), "memory://current");
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "fruitstand",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--database-uri",
            "file://./fruits.json",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
    }

    #[test]
    fn test_rejects_bad_port() {
        let result = Cli::try_parse_from([
            "fruitstand",
            "serve",
            "--port",
            "not-a-port",
            "--database-uri",
            "memory://",
        ]);
        assert!(result.is_err());
    }
}
