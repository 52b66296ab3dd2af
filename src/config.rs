use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECONDS: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub user_agent: String,
    pub request_timeout_seconds: u64,
    /// Where `/code` redirects to, if anywhere
    pub code_url: Option<String>,
    pub log_json: bool,
}

impl Config {
    /// Defaults, then `emojos.toml` if present, then `EMOJOS_*` variables.
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name("emojos").required(false))
            .add_source(Environment::with_prefix("EMOJOS").try_parsing(true));

        Self::from_builder(builder)
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = config::Config::builder()
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .set_default("user_agent", default_user_agent())?
            .set_default("request_timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
            .set_default("log_json", false)?;

        Ok(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

fn default_user_agent() -> String {
    format!("emojos/{}", env!("CARGO_PKG_VERSION"))
}
