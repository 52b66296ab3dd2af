use anyhow::Result;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::config::Config;

/// Outbound client shared by every request. The timeout bounds how long a slow
/// instance can hold up a page.
pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .pool_max_idle_per_host(2)
        .build()?;

    Ok(client)
}
