use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address the HTTP server binds to
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory holding the stored game records
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Base URL of the BoardGameGeek XML API
    #[arg(long, env = "CATALOG_URL", default_value = super::DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Delay between new item detail fetches, in milliseconds
    #[arg(long, env = "API_CALL_DELAY_MS", default_value_t = 750)]
    pub api_call_delay_ms: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve,
    /// Sync a user's owned collection into the store once
    Sync {
        #[arg(long)]
        username: String,
    },
    /// Re-fetch every stored game once
    Refresh,
}
