use serde::{Deserialize, Serialize};

/// A geocoded location with both coordinates present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry of the geocoding API's `results` list.
///
/// Only the fields below are read; everything else the API sends
/// (`id`, `elevation`, `country_code`, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGeocodingResult {
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Geocoding API body. `results` is omitted by the API when nothing matches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<RawGeocodingResult>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Place> for Coordinates {
    fn from(place: &Place) -> Self {
        Self {
            latitude: place.latitude,
            longitude: place.longitude,
        }
    }
}

/// Forecast API body as returned by Open-Meteo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWeatherPayload {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub generationtime_ms: Option<f64>,
    #[serde(default)]
    pub utc_offset_seconds: Option<i32>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub timezone_abbreviation: Option<String>,
    #[serde(default)]
    pub elevation: Option<f64>,

    pub current_units: CurrentUnits,
    pub current: RawCurrent,
    pub hourly_units: HourlyUnits,
    pub hourly: RawHourly,
    pub daily_units: DailyUnits,
    pub daily: RawDaily,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUnits {
    pub temperature_2m: String,
    pub relative_humidity_2m: String,
    pub wind_speed_10m: String,
    pub precipitation: String,
    pub apparent_temperature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCurrent {
    pub time: String,
    #[serde(default)]
    pub interval: Option<u32>,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub precipitation: f64,
    pub apparent_temperature: f64,
    pub is_day: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyUnits {
    pub temperature_2m: String,
}

/// Parallel arrays: `time[i]`, `temperature_2m[i]` and `weather_code[i]`
/// describe the same hour. The API uses `null` for missing samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHourly {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUnits {
    pub temperature_2m_max: String,
    pub temperature_2m_min: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDaily {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i32>>,
}

/// Date and time halves of an ISO-8601 local timestamp, as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeatherView {
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub precipitation: String,
    pub is_daytime: bool,
    pub last_updated: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyWeatherView {
    pub date: String,
    pub time: String,
    pub temperature: String,
    pub weather_code: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWeatherView {
    pub date: String,
    pub max_temperature: String,
    pub min_temperature: String,
    pub weather_code: i32,
}

/// All three views for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub current: CurrentWeatherView,
    pub hourly: Vec<HourlyWeatherView>,
    pub daily: Vec<DailyWeatherView>,
}
