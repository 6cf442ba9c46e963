//! Pure conversions from raw forecast blocks to display records.
//!
//! Hourly and daily data arrive as parallel arrays; these functions turn them
//! into one record per index so nothing downstream sees the array layout.

use crate::{
    error::ValidationError,
    format::{format_one_decimal, format_rounded, split_timestamp},
    model::{
        CurrentUnits, CurrentWeatherView, DailyUnits, DailyWeatherView, HourlyUnits,
        HourlyWeatherView, RawCurrent, RawDaily, RawHourly,
    },
};

pub fn transform_current(
    raw: &RawCurrent,
    units: &CurrentUnits,
) -> Result<CurrentWeatherView, ValidationError> {
    Ok(CurrentWeatherView {
        temperature: format_rounded(raw.temperature_2m, &units.temperature_2m),
        feels_like: format_rounded(raw.apparent_temperature, &units.apparent_temperature),
        humidity: format_rounded(raw.relative_humidity_2m, &units.relative_humidity_2m),
        wind_speed: format_one_decimal(raw.wind_speed_10m, &units.wind_speed_10m),
        precipitation: format_one_decimal(raw.precipitation, &units.precipitation),
        is_daytime: raw.is_day == 1,
        last_updated: split_timestamp(&raw.time)?,
    })
}

pub fn transform_hourly(
    raw: &RawHourly,
    units: &HourlyUnits,
) -> Result<Vec<HourlyWeatherView>, ValidationError> {
    const BLOCK: &str = "hourly";
    let len = raw.time.len();
    check_len(BLOCK, "temperature_2m", len, raw.temperature_2m.len())?;
    check_len(BLOCK, "weather_code", len, raw.weather_code.len())?;

    raw.time
        .iter()
        .enumerate()
        .map(|(i, time)| -> Result<HourlyWeatherView, ValidationError> {
            let stamp = split_timestamp(time)?;
            let temperature = sample(BLOCK, "temperature_2m", &raw.temperature_2m, i)?;
            let weather_code = sample(BLOCK, "weather_code", &raw.weather_code, i)?;

            Ok(HourlyWeatherView {
                date: stamp.date,
                time: stamp.time,
                temperature: format_rounded(temperature, &units.temperature_2m),
                weather_code,
            })
        })
        .collect()
}

/// Daily `time` entries are plain dates and are used verbatim.
pub fn transform_daily(
    raw: &RawDaily,
    units: &DailyUnits,
) -> Result<Vec<DailyWeatherView>, ValidationError> {
    const BLOCK: &str = "daily";
    let len = raw.time.len();
    check_len(BLOCK, "temperature_2m_max", len, raw.temperature_2m_max.len())?;
    check_len(BLOCK, "temperature_2m_min", len, raw.temperature_2m_min.len())?;
    check_len(BLOCK, "weather_code", len, raw.weather_code.len())?;

    raw.time
        .iter()
        .enumerate()
        .map(|(i, date)| -> Result<DailyWeatherView, ValidationError> {
            let max = sample(BLOCK, "temperature_2m_max", &raw.temperature_2m_max, i)?;
            let min = sample(BLOCK, "temperature_2m_min", &raw.temperature_2m_min, i)?;
            let weather_code = sample(BLOCK, "weather_code", &raw.weather_code, i)?;

            Ok(DailyWeatherView {
                date: date.clone(),
                max_temperature: format_rounded(max, &units.temperature_2m_max),
                min_temperature: format_rounded(min, &units.temperature_2m_min),
                weather_code,
            })
        })
        .collect()
}

fn check_len(
    block: &'static str,
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ValidationError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ValidationError::LengthMismatch {
            block,
            field,
            expected,
            actual,
        })
    }
}

// Lengths are checked up front, so `index` is always in bounds.
fn sample<T: Copy>(
    block: &'static str,
    field: &'static str,
    values: &[Option<T>],
    index: usize,
) -> Result<T, ValidationError> {
    values
        .get(index)
        .copied()
        .flatten()
        .ok_or(ValidationError::MissingValue {
            block,
            field,
            index,
        })
}
