use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub mod cli;

pub use cli::Commands;

pub const DEFAULT_CATALOG_URL: &str = "https://api.geekdo.com/xmlapi2";
pub const DEFAULT_API_CALL_DELAY: Duration = Duration::from_millis(750);

/// Everything the sync workflow needs to know about the remote catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_call_delay: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            api_call_delay: DEFAULT_API_CALL_DELAY,
        }
    }
}

pub struct Config {
    pub args: Args,
    pub catalog: CatalogConfig,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let catalog = CatalogConfig {
            base_url: args.catalog_url.trim_end_matches('/').to_string(),
            api_call_delay: Duration::from_millis(args.api_call_delay_ms),
        };

        let http_client = Client::builder()
            .user_agent(concat!("boardgame-sync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            args,
            catalog,
            http_client,
        })
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.args.data_dir
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.args.host, self.args.port)
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }

        info!("Data dir {:?} exists", self.args.data_dir);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn catalog_defaults() {
        let catalog = CatalogConfig::default();

        assert_eq!(catalog.base_url, DEFAULT_CATALOG_URL);
        assert_eq!(catalog.api_call_delay, Duration::from_millis(750));
    }

    #[test]
    fn explicit_args_build_catalog_config() {
        let args = Args::try_parse_from([
            "boardgame-sync",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--data-dir",
            "games-data",
            "--catalog-url",
            DEFAULT_CATALOG_URL,
            "--api-call-delay-ms",
            "250",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();

        assert!(config.args.command.is_none());
        assert_eq!(config.catalog.base_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.catalog.api_call_delay, Duration::from_millis(250));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.data_dir(), &PathBuf::from("games-data"));
    }

    #[test]
    fn host_env_fallback_is_bind_host() {
        let command = Args::command();
        let host = command
            .get_arguments()
            .find(|arg| arg.get_id() == "host")
            .unwrap();

        assert_eq!(host.get_env(), Some(std::ffi::OsStr::new("BIND_HOST")));
    }

    #[test]
    fn sync_subcommand_takes_username() {
        let args = Args::try_parse_from([
            "boardgame-sync",
            "--catalog-url",
            "http://localhost:9000/xmlapi2/",
            "sync",
            "--username",
            "alice",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.catalog.base_url, "http://localhost:9000/xmlapi2");
        match config.args.command {
            Some(Commands::Sync { username }) => assert_eq!(username, "alice"),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
