//! Configuration loading and port resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Port used when nothing else selects one
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable selecting the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// SAS OnlineShopping shop listing API
pub const DEFAULT_SAS_URL: &str = "https://onlineshopping.loyaltykey.com/api/v1/shops?filter[channel]=SAS&filter[language]=nb&filter[country]=NO&filter[amount]=5000&filter[compressed]=true";

/// Trumf Netthandel listing page (all shops on a single page)
pub const DEFAULT_TRUMF_URL: &str = "https://trumfnetthandel.no/category/paged/all/999/0/popularity/";

/// Base of the public SAS shop page links
pub const DEFAULT_SAS_STORE_BASE_URL: &str = "https://onlineshopping.flysas.com/nb-NO/butikker";

/// Base of the public Trumf cashback page links
pub const DEFAULT_TRUMF_BASE_URL: &str = "https://trumfnetthandel.no/cashback";

/// On-disk TOML configuration; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub upstream: UpstreamToml,
}

/// `[upstream]` table of the TOML configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamToml {
    pub sas_url: Option<String>,
    pub trumf_url: Option<String>,
    pub sas_store_base_url: Option<String>,
    pub trumf_base_url: Option<String>,
    pub accept_invalid_certs: Option<bool>,
}

/// Resolved upstream endpoints and link bases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// JSON API listing SAS shops
    pub sas_url: String,
    /// HTML page listing Trumf shops
    pub trumf_url: String,
    /// Prefix for `sasonlineshopping_extra.url`
    pub sas_store_base_url: String,
    /// Prefix for `trumfnetthandel_extra.url`
    pub trumf_base_url: String,
    /// Skip TLS certificate verification on outbound calls
    pub accept_invalid_certs: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            sas_url: DEFAULT_SAS_URL.to_string(),
            trumf_url: DEFAULT_TRUMF_URL.to_string(),
            sas_store_base_url: DEFAULT_SAS_STORE_BASE_URL.to_string(),
            trumf_base_url: DEFAULT_TRUMF_BASE_URL.to_string(),
            accept_invalid_certs: true,
        }
    }
}

impl UpstreamConfig {
    /// Overlay TOML values on top of the compiled defaults
    pub fn from_toml(toml: &UpstreamToml) -> Self {
        let defaults = Self::default();
        Self {
            sas_url: toml.sas_url.clone().unwrap_or(defaults.sas_url),
            trumf_url: toml.trumf_url.clone().unwrap_or(defaults.trumf_url),
            sas_store_base_url: toml
                .sas_store_base_url
                .clone()
                .unwrap_or(defaults.sas_store_base_url),
            trumf_base_url: toml
                .trumf_base_url
                .clone()
                .unwrap_or(defaults.trumf_base_url),
            accept_invalid_certs: toml
                .accept_invalid_certs
                .unwrap_or(defaults.accept_invalid_certs),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub upstream: UpstreamConfig,
}

impl ServerConfig {
    /// Load configuration from CLI values, environment and optional TOML file
    ///
    /// `strict_tls` forces certificate verification on regardless of the file.
    pub fn load(
        cli_port: Option<u16>,
        config_path: Option<&Path>,
        strict_tls: bool,
    ) -> Result<Self> {
        let toml_config = match config_path {
            Some(path) => load_toml_config(path)?,
            None => TomlConfig::default(),
        };

        let port = resolve_port(cli_port, PORT_ENV_VAR, toml_config.port)?;

        let mut upstream = UpstreamConfig::from_toml(&toml_config.upstream);
        if strict_tls {
            upstream.accept_invalid_certs = false;
        }

        Ok(Self { port, upstream })
    }
}

/// Read and parse a TOML configuration file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    let config: TomlConfig = toml::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })?;

    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Port resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable (empty value counts as unset)
/// 3. TOML config file
/// 4. Compiled default (8080)
pub fn resolve_port(
    cli_arg: Option<u16>,
    env_var_name: &str,
    config_file_port: Option<u16>,
) -> Result<u16> {
    // Priority 1: Command-line argument
    if let Some(port) = cli_arg {
        debug!(port, "Port from command line");
        return Ok(port);
    }

    // Priority 2: Environment variable
    if let Ok(value) = std::env::var(env_var_name) {
        let value = value.trim();
        if !value.is_empty() {
            return value.parse::<u16>().map_err(|_| {
                Error::Config(format!("{} is not a valid port: {:?}", env_var_name, value))
            });
        }
    }

    // Priority 3: TOML config file
    if let Some(port) = config_file_port {
        debug!(port, "Port from config file");
        return Ok(port);
    }

    // Priority 4: Compiled default
    Ok(DEFAULT_PORT)
}
