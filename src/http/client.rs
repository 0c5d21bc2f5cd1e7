//! Low-level HTTP client — `CoinboardHttp`.
//!
//! One method per dashboard resource. Returns wire types; conversion to
//! domain records happens at the client layer.

use crate::domain::coin::wire::ListingsResponse;
use crate::domain::global::wire::GlobalResponse;
use crate::domain::meta::wire::MetaResponse;
use crate::domain::search::wire::SearchEntryResponse;
use crate::domain::sentiment::wire::FearGreedResponse;
use crate::error::HttpError;
use crate::http::retry::RetryConfig;
use crate::network::Resource;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout; a hung fetch counts as an unavailable
/// resource instead of keeping a load pending forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Low-level HTTP client for the dashboard's data resources.
#[derive(Clone)]
pub struct CoinboardHttp {
    base_url: String,
    client: Client,
    retry: RetryConfig,
}

impl CoinboardHttp {
    pub fn new(base_url: &str) -> Self {
        Self::with_config(base_url, DEFAULT_TIMEOUT, RetryConfig::default())
    }

    pub fn with_config(base_url: &str, timeout: Duration, retry: RetryConfig) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        }
    }

    // ── Resources ────────────────────────────────────────────────────────

    pub async fn get_listings(&self) -> Result<ListingsResponse, HttpError> {
        self.get(Resource::Listings).await
    }

    pub async fn get_global(&self) -> Result<GlobalResponse, HttpError> {
        self.get(Resource::Global).await
    }

    pub async fn get_fear_greed(&self) -> Result<FearGreedResponse, HttpError> {
        self.get(Resource::FearGreed).await
    }

    pub async fn get_meta(&self) -> Result<MetaResponse, HttpError> {
        self.get(Resource::Meta).await
    }

    pub async fn get_search_index(&self) -> Result<Vec<SearchEntryResponse>, HttpError> {
        self.get(Resource::SearchIndex).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, resource.path());
        let mut last_error = None;

        for attempt in 0..=self.retry.max_retries {
            match self.do_get(&url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            self.retry.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < self.retry.max_retries {
                        let delay = self.retry.delay_for_attempt(attempt);
                        tracing::debug!(
                            resource = %resource,
                            attempt = attempt + 1,
                            max = self.retry.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "retrying fetch"
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: self.retry.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
