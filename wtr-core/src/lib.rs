//! Core library for the `wtr` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather geocoding and weather lookups
//! - Table formatting and the per-location lookup flow
//!
//! It is used by `wtr-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod orchestrator;
pub mod provider;

pub use config::Config;
pub use error::WtrError;
pub use format::DisplayTable;
pub use model::{Coordinates, LocationQuery, WeatherPayload, WeatherReport};
pub use orchestrator::{LocationReport, Orchestrator};
pub use provider::{WeatherService, service_from_config};
