use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_GEOCODING_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// OpenWeather endpoints, overridable from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub geocoding: String,
    pub weather: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding: DEFAULT_GEOCODING_URL.to_string(),
            weather: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

/// Configuration read from disk and the environment.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
///
/// [endpoints]
/// weather = "https://api.openweathermap.org/data/3.0/onecall"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Load the config file if it exists, then let the environment override the key.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let cfg = Self::load_from(&path)?;
        Ok(cfg.with_env_key(std::env::var(API_KEY_ENV).ok()))
    }

    /// Load a config file, returning an empty default if it doesn't exist.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wtr", "wtr")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replace the key with `env_key` when it is set and non-blank.
    pub fn with_env_key(mut self, env_key: Option<String>) -> Self {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Returns the API key, treating blank values as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}
