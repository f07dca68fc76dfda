use crate::{
    Config,
    error::{Result, WtrError},
    model::{Coordinates, LocationQuery, WeatherReport},
    provider::openweather::OpenWeatherService,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// The two lookups needed per location: geocoding, then weather.
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    /// Map a location name to coordinates and a display name.
    async fn resolve(&self, query: &LocationQuery) -> Result<Coordinates>;

    /// Fetch current conditions and the daily forecast for resolved coordinates.
    async fn fetch(&self, coords: &Coordinates) -> Result<WeatherReport>;
}

/// Construct the OpenWeather service from config.
pub fn service_from_config(config: &Config) -> Result<Box<dyn WeatherService>> {
    let api_key = config.api_key().ok_or(WtrError::MissingApiKey)?;

    let service = OpenWeatherService::new(api_key.to_owned(), config.endpoints.clone())?;
    Ok(Box::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = service_from_config(&cfg).unwrap_err();
        assert!(matches!(err, WtrError::MissingApiKey));
    }

    #[test]
    fn service_from_config_works_when_key_configured() {
        let cfg = Config::default().with_env_key(Some("KEY".into()));
        assert!(service_from_config(&cfg).is_ok());
    }
}
