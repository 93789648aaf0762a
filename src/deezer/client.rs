use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{config, types::Page};

use super::{ApiError, PAGE_SIZE};

/// Per-request timeout, applied when the client is built.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Total attempts per request, transient failures included.
const MAX_ATTEMPTS: u32 = 5;

/// Base delay of the exponential backoff between attempts.
const BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Server-side statuses worth another attempt.
const RETRYABLE_STATUS: [StatusCode; 4] = [
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Reusable Deezer API client.
///
/// Built once per run with a fixed timeout and retry policy and passed
/// explicitly through all fetch calls. Transient failures (retryable
/// statuses, timeouts, connection errors) are retried with exponential
/// backoff up to the attempt budget; whatever survives is returned as a
/// terminal [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Builds the client against the configured API base URL.
    pub fn new() -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base: config::api_url(),
        })
    }

    /// Issues a GET request against `path` and deserializes the JSON body.
    ///
    /// Retries transient failures with exponential backoff (1s, 2s, 4s, ...)
    /// up to [`MAX_ATTEMPTS`] total attempts. Non-retryable statuses and
    /// exhausted budgets surface as a terminal [`ApiError`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!(
            "{base}/{path}",
            base = self.base.trim_end_matches('/'),
            path = path
        );

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let response = match self.http.get(&url).query(query).send().await {
                Ok(response) => response,
                Err(err) => {
                    let transient = err.is_timeout() || err.is_connect();
                    if transient && attempt < MAX_ATTEMPTS {
                        sleep(backoff_delay(attempt)).await;
                        continue; // retry
                    }
                    return Err(ApiError::Transport(err));
                }
            };

            let status = response.status();
            if RETRYABLE_STATUS.contains(&status) {
                if attempt < MAX_ATTEMPTS {
                    sleep(backoff_delay(attempt)).await;
                    continue; // retry
                }
                return Err(ApiError::Status(status));
            }
            if !status.is_success() {
                return Err(ApiError::Status(status));
            }

            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }
    }

    /// Fetches one page of a paginated list endpoint at the given index.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        index: u64,
    ) -> Result<Page<T>, ApiError> {
        self.get_json(
            path,
            &[
                ("limit", PAGE_SIZE.to_string()),
                ("index", index.to_string()),
            ],
        )
        .await
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    BACKOFF_BASE * 2u32.pow(attempt.saturating_sub(1))
}
