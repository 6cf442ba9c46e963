//! HTTP capability passed into every fetcher.

use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

use crate::{config::HttpConfig, error::TransportError};

/// Successful (2xx) response with its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub data: serde_json::Value,
}

#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    /// Issue one GET with `params` as the query string.
    ///
    /// Non-2xx statuses are errors; implementations must not retry.
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Build a client honouring the optional timeout and user agent.
    pub fn from_config(config: &HttpConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.as_str());
        }

        Ok(Self::new(builder.build()?))
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<HttpResponse, TransportError> {
        tracing::debug!(url, ?params, "GET");

        let res = self.http.get(url).query(params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(url, %status, "upstream returned an error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let data = serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            data,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let body = "°".repeat(300);
        let cut = truncate_body(&body);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.trim_end_matches("...").chars().count(), 200);
    }

    #[test]
    fn from_config_builds_with_timeout_and_agent() {
        let cfg = HttpConfig {
            timeout_secs: Some(5),
            user_agent: Some("meteo-test".into()),
        };

        assert!(ReqwestTransport::from_config(&cfg).is_ok());
    }
}
