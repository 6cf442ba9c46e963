//! Plain-text rendering of places and forecast views.

use chrono::NaiveDate;
use meteo_core::{Coordinates, DailyWeatherView, Forecast, Place, WeatherCondition};
use std::fmt::Write;

pub fn coordinates(coords: Coordinates) -> String {
    format!("{:.4}, {:.4}", coords.latitude, coords.longitude)
}

pub fn place(place: &Place) -> String {
    format!(
        "{} ({})",
        place.name,
        coordinates(Coordinates::from(place))
    )
}

pub fn places(places: &[Place]) -> String {
    places.iter().map(|p| format!("{}\n", place(p))).collect()
}

/// `Mon 2025-09-15`, or just the raw date if it isn't `YYYY-MM-DD`.
fn day_label(day: &DailyWeatherView) -> String {
    match NaiveDate::parse_from_str(&day.date, "%Y-%m-%d") {
        Ok(date) => format!("{} {}", date.format("%a"), day.date),
        Err(_) => day.date.clone(),
    }
}

pub fn forecast(label: &str, forecast: &Forecast, hours: usize) -> String {
    let current = &forecast.current;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{label}");
    let _ = writeln!(
        out,
        "Now: {} (feels like {}), {}",
        current.temperature,
        current.feels_like,
        if current.is_daytime { "day" } else { "night" }
    );
    let _ = writeln!(
        out,
        "  Humidity {}  Wind {}  Precipitation {}",
        current.humidity, current.wind_speed, current.precipitation
    );
    let _ = writeln!(
        out,
        "  Updated {} {}",
        current.last_updated.date, current.last_updated.time
    );

    if hours > 0 && !forecast.hourly.is_empty() {
        let _ = writeln!(out, "\nHourly:");
        for hour in forecast.hourly.iter().take(hours) {
            let _ = writeln!(
                out,
                "  {} {}  {:>6}  {}",
                hour.date,
                hour.time,
                hour.temperature,
                WeatherCondition::from_wmo_code(hour.weather_code)
            );
        }
    }

    if !forecast.daily.is_empty() {
        let _ = writeln!(out, "\nDaily:");
        for day in &forecast.daily {
            let _ = writeln!(
                out,
                "  {}  {:>6} / {:<6}  {}",
                day_label(day),
                day.max_temperature,
                day.min_temperature,
                WeatherCondition::from_wmo_code(day.weather_code)
            );
        }
    }

    out
}
