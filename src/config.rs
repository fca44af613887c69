//! Runtime configuration.
//!
//! Sources, later ones overriding earlier:
//! 1. Built-in defaults
//! 2. `config.toml` in the working directory (optional)
//! 3. Environment variables prefixed with `SNOOPY_`, sections split by `__`
//!    (e.g. `SNOOPY_BASIC__DATABASE_URL`)

use std::net::SocketAddr;
use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::AirlineError;

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "SNOOPY_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub reservation: ReservationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub loglevel: String,
    /// Create the `Flight`/`Aircraft` tables on startup when missing.
    pub init_schema: bool,
}

/// Where booking details are fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationConfig {
    /// Base URL of the reservation service, e.g. `http://127.0.0.1:3000`.
    pub base_url: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            database_url: "sqlite:snoopy-airlines.sqlite".to_string(),
            loglevel: "info".to_string(),
            init_schema: false,
        }
    }
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AirlineError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(config_file: &Path) -> Result<Self, AirlineError> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }
}
