use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    config::Endpoints,
    error::{Result, WtrError},
    model::{Coordinates, CurrentConditions, DailyForecast, LocationQuery, WeatherReport},
};

use super::WeatherService;

const USER_AGENT: &str = concat!("wtr/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct OpenWeatherService {
    api_key: String,
    endpoints: Endpoints,
    http: Client,
}

impl OpenWeatherService {
    pub fn new(api_key: String, endpoints: Endpoints) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { api_key, endpoints, http })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let res = self
            .http
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WtrError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct OwGeocodeEntry {
    name: Option<String>,
    state: Option<String>,
    country: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl OwGeocodeEntry {
    fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.name, &self.state, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    temp: f64,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwTemp {
    min: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
struct OwDaily {
    dt: i64,
    temp: OwTemp,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwOneCallResponse {
    #[serde(default)]
    timezone_offset: i64,
    current: OwCurrent,
    #[serde(default)]
    daily: Vec<OwDaily>,
}

#[async_trait]
impl WeatherService for OpenWeatherService {
    async fn resolve(&self, query: &LocationQuery) -> Result<Coordinates> {
        debug!(%query, "geocoding location");

        let entries: Vec<OwGeocodeEntry> = self
            .get_json(&self.endpoints.geocoding, &[("q", query.as_str()), ("limit", "1")])
            .await?;

        let entry = entries
            .into_iter()
            .next()
            .ok_or_else(|| WtrError::LocationNotFound(query.to_string()))?;

        let display_name = entry.display_name();
        debug!(?display_name, lat = ?entry.lat, lon = ?entry.lon, "resolved location");

        Ok(Coordinates { latitude: entry.lat, longitude: entry.lon, display_name })
    }

    async fn fetch(&self, coords: &Coordinates) -> Result<WeatherReport> {
        let (lat, lon) = coords.point().ok_or_else(|| {
            WtrError::IncompleteCoordinates(
                coords.display_name.clone().unwrap_or_else(|| "unnamed location".to_string()),
            )
        })?;

        debug!(lat, lon, "fetching weather");

        let (lat, lon) = (lat.to_string(), lon.to_string());
        let parsed: OwOneCallResponse = self
            .get_json(
                &self.endpoints.weather,
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("exclude", "hourly,minutely"),
                    ("units", "metric"),
                ],
            )
            .await?;

        let offset = parsed.timezone_offset;
        let daily = parsed
            .daily
            .into_iter()
            .filter_map(|day| {
                Some(DailyForecast {
                    date: local_date(day.dt, offset)?,
                    min_c: day.temp.min,
                    max_c: day.temp.max,
                    description: first_description(&day.weather),
                })
            })
            .collect();

        Ok(WeatherReport {
            display_name: coords.display_name.clone(),
            current: CurrentConditions {
                temperature_c: parsed.current.temp,
                description: first_description(&parsed.current.weather),
            },
            daily,
        })
    }
}

fn first_description(weather: &[OwWeather]) -> String {
    weather.first().map(|w| w.description.clone()).unwrap_or_else(|| "Unknown".to_string())
}

/// Calendar date at the location, given a UTC timestamp and its offset in seconds.
fn local_date(ts: i64, offset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts.checked_add(offset)?, 0).map(|dt| dt.date_naive())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
