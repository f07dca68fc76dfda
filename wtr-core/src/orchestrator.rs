//! Per-location lookup flow: validate, resolve, fetch, format.

use std::{fmt, io::Write};

use tracing::{debug, warn};

use crate::{
    format::{DisplayTable, build_table, title_name},
    model::LocationQuery,
    provider::WeatherService,
};

/// Outcome of looking up one requested location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationReport {
    Table(DisplayTable),
    NoData(String),
    Invalid(String),
}

impl fmt::Display for LocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationReport::Table(table) => write!(f, "{table}"),
            LocationReport::NoData(query) => {
                write!(f, "No weather data available for '{query}'.")
            }
            LocationReport::Invalid(query) => {
                write!(f, "Invalid location '{query}': only alphabetic characters are allowed.")
            }
        }
    }
}

#[derive(Debug)]
pub struct Orchestrator {
    service: Box<dyn WeatherService>,
    week: bool,
}

impl Orchestrator {
    pub fn new(service: Box<dyn WeatherService>, week: bool) -> Self {
        Self { service, week }
    }

    /// Look up each location in order, writing every report as soon as it is ready.
    ///
    /// An invalid location is reported and skipped; the remaining ones are still processed.
    pub async fn run<W: Write>(&self, locations: &[String], out: &mut W) -> std::io::Result<()> {
        for (i, raw) in locations.iter().enumerate() {
            let report = self.lookup(raw).await;
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{report}")?;
        }
        Ok(())
    }

    pub async fn lookup(&self, raw: &str) -> LocationReport {
        let query = match LocationQuery::parse(raw) {
            Ok(query) => query,
            Err(err) => {
                warn!(%err, "skipping location");
                return LocationReport::Invalid(raw.to_string());
            }
        };

        let coords = match self.service.resolve(&query).await {
            Ok(coords) => Some(coords),
            Err(err) => {
                warn!(%query, %err, "geocoding failed");
                None
            }
        };

        let report = match coords.as_ref().filter(|c| c.point().is_some()) {
            Some(coords) => match self.service.fetch(coords).await {
                Ok(report) => Some(report),
                Err(err) => {
                    warn!(%query, %err, "weather lookup failed");
                    None
                }
            },
            None => {
                debug!(%query, "no usable coordinates, skipping weather lookup");
                None
            }
        };

        let display_name = report
            .as_ref()
            .and_then(|r| r.display_name.clone())
            .or_else(|| coords.and_then(|c| c.display_name));
        let name = title_name(display_name.as_deref(), query.as_str());

        let payload = report.map(|r| r.into_payload(self.week));
        let table = build_table(payload.as_ref(), self.week, &name);

        if table.is_empty() {
            LocationReport::NoData(raw.to_string())
        } else {
            LocationReport::Table(table)
        }
    }
}
