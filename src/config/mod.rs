pub mod lenient;
pub mod log_level;
pub mod message_policy;

use std::path::Path;

use figment::providers::{Format, Yaml};
use figment::{Figment, providers::Env};
use serde::Deserialize;

use crate::config::{log_level::LogLevel, message_policy::MessagePolicy};

pub const CONFIG_FILE_NAME: &str = "forwarder.yaml";
pub const ENV_PREFIX: &str = "FORWARDER_";

#[derive(Debug, PartialEq, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// Destination URL for forwarded log batches.
    pub api_endpoint: String,
    pub log_level: LogLevel,
    pub missing_message_policy: MessagePolicy,
    /// Request timeout in seconds, reqwest's default applies when unset
    pub http_timeout: Option<u64>,
    pub https_proxy: Option<String>,
}

#[derive(Debug, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub enum ConfigError {
    ParseError(String),
    MissingField(String),
    InvalidField(String),
}

/// Loads the forwarder configuration.
///
/// Sources are merged in increasing precedence: `forwarder.yaml` in
/// `config_directory`, the raw `API_ENDPOINT` and `HTTPS_PROXY` variables,
/// then every `FORWARDER_`-prefixed variable.
#[allow(clippy::module_name_repetitions)]
pub fn get_config(config_directory: &Path) -> Result<Config, ConfigError> {
    let path = config_directory.join(CONFIG_FILE_NAME);

    let figment = Figment::new()
        .merge(Yaml::file(&path))
        .merge(Env::raw().only(&["API_ENDPOINT", "HTTPS_PROXY"]))
        .merge(Env::prefixed(ENV_PREFIX));

    let mut config: Config = match figment.extract() {
        Ok(config) => config,
        Err(err) => {
            println!("Failed to parse forwarder config: {err}");
            return Err(ConfigError::ParseError(err.to_string()));
        }
    };

    config.api_endpoint = config.api_endpoint.trim().to_string();
    if config.api_endpoint.is_empty() {
        return Err(ConfigError::MissingField("api_endpoint".to_string()));
    }
    validate_endpoint(&config.api_endpoint)?;

    if config
        .https_proxy
        .as_deref()
        .is_some_and(|proxy| proxy.trim().is_empty())
    {
        config.https_proxy = None;
    }
    if let Some(proxy) = config.https_proxy.as_deref() {
        reqwest::Proxy::https(proxy)
            .map_err(|e| ConfigError::InvalidField(format!("https_proxy: {e}")))?;
    }

    Ok(config)
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    match reqwest::Url::parse(endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(ConfigError::InvalidField(format!(
            "api_endpoint: unsupported scheme '{}'",
            url.scheme()
        ))),
        Err(e) => Err(ConfigError::InvalidField(format!("api_endpoint: {e}"))),
    }
}
