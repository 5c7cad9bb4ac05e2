use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Runtime configuration. Runs with no flags at all: port 8000, data file
/// and web assets in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "adressbuch", version, about = "Address book HTTP service")]
pub struct Config {
    /// Port the HTTP server listens on, all interfaces.
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// JSON file the address book is persisted to.
    #[arg(long, default_value = "addresses.json")]
    pub data_file: PathBuf,

    /// Directory static assets are served from.
    #[arg(long, default_value = "web")]
    pub web_root: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self::try_parse()?)
    }

    /// Configuration for tests: ephemeral port, caller-supplied paths.
    pub fn new_test(data_file: PathBuf, web_root: PathBuf) -> Self {
        Self {
            port: 0,
            data_file,
            web_root,
        }
    }
}
