//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - Typed Open-Meteo geocoding and forecast payloads
//! - An injectable HTTP transport with a `reqwest` implementation
//! - Single-request fetchers for places and forecasts
//! - Pure transforms from raw forecast blocks to display-ready records
//! - Endpoint / HTTP configuration
//!
//! It is used by `meteo-cli`, but any front-end can render the view records.

pub mod condition;
pub mod config;
pub mod error;
pub mod format;
pub mod geocoding;
pub mod model;
pub mod transport;
pub mod weather;

pub use condition::WeatherCondition;
pub use config::{Config, Endpoints, HttpConfig};
pub use error::{MeteoError, TransportError, ValidationError};
pub use geocoding::{fetch_places, parse_geocoding_results};
pub use model::{
    Coordinates, CurrentWeatherView, DailyWeatherView, Forecast, HourlyWeatherView, Place,
    RawGeocodingResult, RawWeatherPayload, Timestamp,
};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use weather::{
    fetch_forecast, fetch_weather, transform_current, transform_daily, transform_hourly,
};
