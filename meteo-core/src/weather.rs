//! Forecast download and its conversion into view records.

use crate::{
    config::Endpoints,
    error::MeteoError,
    model::{Coordinates, Forecast, RawWeatherPayload},
    transport::HttpTransport,
};

pub mod transform;

pub use transform::{transform_current, transform_daily, transform_hourly};

pub const DAILY_VARIABLES: &[&str] = &["temperature_2m_max", "temperature_2m_min", "weather_code"];
pub const HOURLY_VARIABLES: &[&str] = &["temperature_2m", "weather_code"];
pub const CURRENT_VARIABLES: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "wind_speed_10m",
    "precipitation",
    "apparent_temperature",
    "is_day",
];

fn forecast_params(coords: Coordinates) -> [(&'static str, String); 5] {
    [
        ("latitude", coords.latitude.to_string()),
        ("longitude", coords.longitude.to_string()),
        ("daily", DAILY_VARIABLES.join(",")),
        ("hourly", HOURLY_VARIABLES.join(",")),
        ("current", CURRENT_VARIABLES.join(",")),
    ]
}

/// Download the raw forecast for `coords`. The body is decoded but not
/// reshaped; transport failures are returned unchanged.
pub async fn fetch_weather(
    transport: &dyn HttpTransport,
    endpoints: &Endpoints,
    coords: Coordinates,
) -> Result<RawWeatherPayload, MeteoError> {
    let response = transport
        .get(&endpoints.forecast_url, &forecast_params(coords))
        .await?;

    serde_json::from_value(response.data).map_err(|source| MeteoError::Schema {
        endpoint: "forecast",
        source,
    })
}

/// [`fetch_weather`] followed by all three transforms.
pub async fn fetch_forecast(
    transport: &dyn HttpTransport,
    endpoints: &Endpoints,
    coords: Coordinates,
) -> Result<Forecast, MeteoError> {
    let raw = fetch_weather(transport, endpoints, coords).await?;

    Ok(Forecast {
        current: transform_current(&raw.current, &raw.current_units)?,
        hourly: transform_hourly(&raw.hourly, &raw.hourly_units)?,
        daily: transform_daily(&raw.daily, &raw.daily_units)?,
    })
}
