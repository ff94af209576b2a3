use carming::{order, shared::geo::Coordinate};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENV_PREFIX: &str = "CARMING_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
    #[error("Invalid config value {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    pub arrival_radius_m: f64,
    pub path_step_m: f64,
    /// Where the vehicle is assumed to be until it reports a position.
    pub origin_lat: f64,
    pub origin_lng: f64,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            arrival_radius_m: 30.0,
            path_step_m: 100.0,
            origin_lat: 37.5665,
            origin_lng: 126.978,
        }
    }
}

impl OrderConfig {
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.origin_lat, self.origin_lng)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.path_step_m.is_finite() && self.path_step_m > 0.0) {
            return Err(ConfigError::Invalid {
                key: "order.path_step_m",
                reason: format!("must be positive meters, got {}", self.path_step_m),
            });
        }
        if !(self.arrival_radius_m.is_finite() && self.arrival_radius_m >= 0.0) {
            return Err(ConfigError::Invalid {
                key: "order.arrival_radius_m",
                reason: format!("must be zero or more meters, got {}", self.arrival_radius_m),
            });
        }
        if !self.origin().is_valid() {
            return Err(ConfigError::Invalid {
                key: "order.origin_lat/origin_lng",
                reason: format!("{} is not a valid coordinate", self.origin()),
            });
        }
        Ok(())
    }

    pub fn service_config(&self) -> order::Config {
        order::Config {
            arrival_radius: self.arrival_radius_m.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub order: OrderConfig,
    /// CSV export of members to serve lookups from.
    pub members_path: Option<PathBuf>,
}

impl Config {
    /// Defaults, then the TOML file if it exists, then `CARMING_*` env vars
    /// (`CARMING_SERVER__PORT=8080`).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.order.validate()?;
        Ok(config)
    }
}
