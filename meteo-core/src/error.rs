use thiserror::Error;

/// Failure raised by an [`HttpTransport`](crate::transport::HttpTransport).
///
/// Fetchers never wrap or retry these; they surface through
/// [`MeteoError::Transport`] exactly as the transport produced them.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response body is not valid JSON: {0}")]
    Decode(String),
}

/// Raw forecast data that cannot be turned into view records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{block}.{field} has {actual} entries, expected {expected} (same as {block}.time)")]
    LengthMismatch {
        block: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{block}.{field}[{index}] is null")]
    MissingValue {
        block: &'static str,
        field: &'static str,
        index: usize,
    },

    #[error("timestamp '{0}' has no 'T' date/time separator")]
    Timestamp(String),
}

#[derive(Debug, Error)]
pub enum MeteoError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected {endpoint} response shape: {source}")]
    Schema {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid forecast data: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_displays_unchanged_through_meteo_error() {
        let inner = TransportError::Status {
            status: 502,
            body: "bad gateway".into(),
        };
        let expected = inner.to_string();

        let err = MeteoError::from(inner);

        assert_eq!(err.to_string(), expected);
        assert!(matches!(
            err,
            MeteoError::Transport(TransportError::Status { status: 502, .. })
        ));
    }

    #[test]
    fn length_mismatch_names_the_offending_array() {
        let err = ValidationError::LengthMismatch {
            block: "hourly",
            field: "weather_code",
            expected: 3,
            actual: 2,
        };

        let msg = err.to_string();
        assert!(msg.contains("hourly.weather_code"));
        assert!(msg.contains("expected 3"));
    }
}
