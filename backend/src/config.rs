//! Server configuration.
//!
//! Settings come from an optional `dashboard.toml` and are then overridden by
//! environment variables:
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `DATA_PATH`: Launch records CSV (default: spacex_launch_dash.csv)
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8050
//!
//! [data]
//! path = "data/spacex_launch_dash.csv"
//!
//! [slider]
//! min = 0.0
//! max = 10000.0
//! step = 1000.0
//! default_low = 1000.0
//! default_high = 6000.0
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{
    PayloadRange, SelectionError, SliderDomain, DEFAULT_PAYLOAD_RANGE, DEFAULT_SLIDER_DOMAIN,
};

/// Configuration loading or validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid value '{value}' for {var}: {message}")]
    InvalidEnv {
        var: String,
        value: String,
        message: String,
    },

    #[error("Invalid slider settings: {0}")]
    InvalidSlider(#[from] SelectionError),

    #[error("Slider step must be positive, got {0}")]
    InvalidStep(f64),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub slider: SliderSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

/// Payload slider bounds, step and initial value (kg).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    #[serde(default = "default_slider_min")]
    pub min: f64,
    #[serde(default = "default_slider_max")]
    pub max: f64,
    #[serde(default = "default_slider_step")]
    pub step: f64,
    #[serde(default = "default_low")]
    pub default_low: f64,
    #[serde(default = "default_high")]
    pub default_high: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_data_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

fn default_slider_min() -> f64 {
    DEFAULT_SLIDER_DOMAIN[0]
}

fn default_slider_max() -> f64 {
    DEFAULT_SLIDER_DOMAIN[1]
}

fn default_slider_step() -> f64 {
    1000.0
}

fn default_low() -> f64 {
    DEFAULT_PAYLOAD_RANGE[0]
}

fn default_high() -> f64 {
    DEFAULT_PAYLOAD_RANGE[1]
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min: default_slider_min(),
            max: default_slider_max(),
            step: default_slider_step(),
            default_low: default_low(),
            default_high: default_high(),
        }
    }
}

impl SliderSettings {
    pub fn domain(&self) -> Result<SliderDomain, ConfigError> {
        Ok(SliderDomain::new(self.min, self.max)?)
    }

    /// Initial slider value, checked against the domain.
    pub fn default_range(&self) -> Result<PayloadRange, ConfigError> {
        let domain = self.domain()?;
        Ok(PayloadRange::new(self.default_low, self.default_high)?.within(&domain)?)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `dashboard.toml` from the first standard location that has one,
    /// falling back to defaults.
    ///
    /// Searches:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Default-location config with environment overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_default_location()?.apply_env_overrides()
    }

    pub fn apply_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|var| env::var(var).ok())
    }

    /// Apply `HOST`, `PORT` and `DATA_PATH` from `lookup`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    var: "PORT".to_string(),
                    value: port.clone(),
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(path) = lookup("DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slider.step.is_nan() || self.slider.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.slider.step));
        }
        self.slider.default_range()?;
        Ok(())
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
