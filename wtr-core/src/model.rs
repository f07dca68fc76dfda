use chrono::NaiveDate;

use crate::error::{Result, WtrError};

/// Maximum number of days shown by the weekly forecast.
pub const FORECAST_DAYS: usize = 7;

/// A location name as typed by the user, checked to be purely alphabetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.is_empty() && raw.chars().all(char::is_alphabetic) {
            Ok(Self(raw.to_string()))
        } else {
            Err(WtrError::InvalidLocation(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of geocoding a location.
///
/// Either coordinate may be missing when the provider omits it; such a
/// value cannot be used to fetch weather.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// "City, State, Country" as reported by the geocoder, if it named the place.
    pub display_name: Option<String>,
}

impl Coordinates {
    pub fn point(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub min_c: f64,
    pub max_c: f64,
    pub description: String,
}

/// Everything the weather endpoint returned for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub display_name: Option<String>,
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
}

impl WeatherReport {
    /// Select the block the caller asked for.
    pub fn into_payload(self, week: bool) -> WeatherPayload {
        if week {
            let mut daily = self.daily;
            daily.truncate(FORECAST_DAYS);
            WeatherPayload::Forecast(daily)
        } else {
            WeatherPayload::Current(self.current)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherPayload {
    Current(CurrentConditions),
    Forecast(Vec<DailyForecast>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(days: usize) -> WeatherReport {
        let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        WeatherReport {
            display_name: Some("Paris, Ile-de-France, FR".into()),
            current: CurrentConditions { temperature_c: 14.2, description: "mist".into() },
            daily: (0..days)
                .map(|i| DailyForecast {
                    date: start + chrono::Days::new(i as u64),
                    min_c: 8.0,
                    max_c: 15.0,
                    description: "light rain".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn alphabetic_queries_are_accepted() {
        for raw in ["Paris", "london", "München", "Zürich"] {
            let query = LocationQuery::parse(raw).expect("alphabetic query");
            assert_eq!(query.as_str(), raw);
        }
    }

    #[test]
    fn non_alphabetic_queries_are_rejected() {
        for raw in ["", "xyz123", "New York", "St.Louis", "Paris!"] {
            let err = LocationQuery::parse(raw).unwrap_err();
            assert!(matches!(err, WtrError::InvalidLocation(ref q) if q == raw));
        }
    }

    #[test]
    fn point_requires_both_coordinates() {
        let mut coords = Coordinates {
            latitude: Some(12.34),
            longitude: Some(56.78),
            display_name: Some("Paris, FR".into()),
        };
        assert_eq!(coords.point(), Some((12.34, 56.78)));

        coords.longitude = None;
        assert_eq!(coords.point(), None);
    }

    #[test]
    fn week_payload_is_capped_at_seven_days() {
        match report(8).into_payload(true) {
            WeatherPayload::Forecast(days) => assert_eq!(days.len(), FORECAST_DAYS),
            other => panic!("expected forecast, got {other:?}"),
        }
    }

    #[test]
    fn today_payload_uses_current_block() {
        let payload = report(8).into_payload(false);
        assert_eq!(
            payload,
            WeatherPayload::Current(CurrentConditions {
                temperature_c: 14.2,
                description: "mist".into()
            })
        );
    }
}
