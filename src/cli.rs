use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Serve ECA&D daily mean temperatures over HTTP.
#[derive(Parser, Debug)]
#[command(name = "ecad-weather-api")]
#[command(about = "HTTP API for ECA&D daily mean temperature station files")]
#[command(version)]
pub struct Cli {
    /// Directory containing stations.txt and the TG_STAID*.txt data files
    #[arg(long, env = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Host address to bind the HTTP server to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            data_dir: self.data_dir,
            server_host: self.host,
            server_port: self.port,
        }
    }
}
