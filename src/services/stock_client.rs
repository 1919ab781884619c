use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use url::Url;

use crate::configuration::ScraperSettings;

/// Fetch-side failures. Each maps to a gateway-class HTTP status so the
/// caller gets a structured error instead of a bare 500.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("failed to reach upstream: {0}")]
    Network(String),
    #[error("failed to read upstream response body: {0}")]
    Body(String),
}

impl ResponseError for ScrapeError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ScrapeError::Network(_) | ScrapeError::Body(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let kind = match self {
            ScrapeError::Timeout => "timeout",
            ScrapeError::Network(_) => "network",
            ScrapeError::Body(_) => "body",
        };
        HttpResponse::build(self.status_code()).json(json!({
            "error": kind,
            "detail": self.to_string(),
        }))
    }
}

/// Long-lived client for the upstream equities page. Built once at startup
/// and shared across requests via `web::Data`; reqwest's `Client` is safe
/// for concurrent use as-is.
pub struct StockClient {
    client: reqwest::Client,
    target_url: Url,
}

impl StockClient {
    pub fn new(settings: &ScraperSettings) -> anyhow::Result<Self> {
        let target_url = Url::parse(&settings.target_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(StockClient { client, target_url })
    }

    /// One GET against the configured page. The response body is returned
    /// whatever the status code; the page markup is all we act on.
    pub async fn fetch_page(&self) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(self.target_url.clone())
            .send()
            .await
            .map_err(|e| {
                log::error!("No response from upstream: {:?}", e);
                if e.is_timeout() {
                    ScrapeError::Timeout
                } else {
                    ScrapeError::Network(e.to_string())
                }
            })?;

        log::debug!("Upstream responded with status {}", response.status());

        response.text().await.map_err(|e| {
            log::error!("Failed to read upstream body: {:?}", e);
            if e.is_timeout() {
                ScrapeError::Timeout
            } else {
                ScrapeError::Body(e.to_string())
            }
        })
    }
}
