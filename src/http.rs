use crate::config;
use core::time::Duration;
use std::error::Error;
use tracing::error;

/// Builds the process-wide client shared by every invocation.
#[must_use]
pub fn get_client(config: &config::Config) -> reqwest::Client {
    build_client(config).unwrap_or_else(|e| {
        error!(
            "Unable to build HTTP client: {}, falling back to defaults without proxy",
            e
        );
        reqwest::Client::new()
    })
}

fn build_client(config: &config::Config) -> Result<reqwest::Client, Box<dyn Error>> {
    let mut client = reqwest::Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(270)))
        // Enable TCP keepalive
        .tcp_keepalive(Some(Duration::from_secs(120)));

    if let Some(timeout) = config.http_timeout {
        client = client.timeout(Duration::from_secs(timeout));
    }

    // This covers FORWARDER_HTTPS_PROXY and HTTPS_PROXY
    if let Some(https_uri) = &config.https_proxy {
        let proxy = reqwest::Proxy::https(https_uri.clone())?;
        Ok(client.proxy(proxy).build()?)
    } else {
        Ok(client.build()?)
    }
}
