//! Place search: turn a free-text name into coordinates.

use crate::{
    config::Endpoints,
    error::MeteoError,
    model::{GeocodingResponse, Place, RawGeocodingResult},
    transport::HttpTransport,
};

/// Look up `query` and return every match that carries both coordinates.
///
/// Transport failures are returned as-is; nothing is retried.
pub async fn fetch_places(
    transport: &dyn HttpTransport,
    endpoints: &Endpoints,
    query: &str,
) -> Result<Vec<Place>, MeteoError> {
    let response = transport
        .get(&endpoints.geocoding_url, &[("name", query.to_string())])
        .await?;

    let body: GeocodingResponse =
        serde_json::from_value(response.data).map_err(|source| MeteoError::Schema {
            endpoint: "geocoding",
            source,
        })?;

    let results = body.results.unwrap_or_default();
    Ok(parse_geocoding_results(&results))
}

/// Keep `name`, `latitude` and `longitude` of each result, dropping any
/// result that lacks a coordinate. `0.0` is a real coordinate and is kept.
pub fn parse_geocoding_results(raw: &[RawGeocodingResult]) -> Vec<Place> {
    let places: Vec<Place> = raw
        .iter()
        .filter_map(|r| match (r.latitude, r.longitude) {
            (Some(latitude), Some(longitude)) => Some(Place {
                name: r.name.clone(),
                latitude,
                longitude,
            }),
            _ => None,
        })
        .collect();

    let dropped = raw.len() - places.len();
    if dropped > 0 {
        tracing::debug!(dropped, "skipped geocoding results without coordinates");
    }

    places
}
