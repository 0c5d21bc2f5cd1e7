//! High-level client — `CoinboardClient` with the shared market snapshot.
//!
//! One logical load per session: the first consumer triggers the fetch
//! pass, concurrent consumers await that same pass, and later consumers
//! read the cached result. `refresh` runs a new pass off to the side and
//! swaps the shared snapshot wholesale when it completes.

use crate::domain::coin::{normalize_listings, Coin};
use crate::domain::global::GlobalStats;
use crate::domain::search::SearchEntry;
use crate::domain::sentiment::FearGreed;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{CoinboardHttp, MarketSource, RetryConfig};
use crate::network::{Resource, DEFAULT_DATA_URL};
use crate::snapshot::Snapshot;

use async_lock::{Mutex, RwLock};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Generic message published when a load hits a defect outside the
/// per-resource isolation. Individual unavailable resources are absorbed
/// silently and never produce this.
const LOAD_DEFECT_MESSAGE: &str = "Failed to load market data";

/// The primary entry point for the Coinboard SDK.
///
/// Cloning is cheap and clones share the same snapshot state, so every
/// consumer in a process sees one logical load.
pub struct CoinboardClient<S = CoinboardHttp> {
    source: S,
    state: Arc<RwLock<Arc<Snapshot>>>,
    load_gate: Arc<Mutex<()>>,
}

impl CoinboardClient<CoinboardHttp> {
    pub fn builder() -> CoinboardClientBuilder {
        CoinboardClientBuilder::default()
    }
}

impl<S: MarketSource> CoinboardClient<S> {
    /// Wraps a custom resource source (alternate feeds, stub transports).
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(Arc::new(Snapshot::initial()))),
            load_gate: Arc::new(Mutex::new(())),
        }
    }

    /// The latest published snapshot, without triggering a load.
    ///
    /// While a pass is in flight this reflects whatever field groups have
    /// settled so far, with `loading` still true.
    pub async fn current(&self) -> Arc<Snapshot> {
        self.state.read().await.clone()
    }

    /// Returns the session snapshot, fetching it on first use.
    ///
    /// Exactly one fetch pass runs per session; concurrent callers share
    /// the in-flight pass and every later caller gets the cached result.
    pub async fn load(&self) -> Arc<Snapshot> {
        {
            let state = self.state.read().await;
            if !state.loading {
                return state.clone();
            }
        }

        let _gate = self.load_gate.lock().await;
        {
            let state = self.state.read().await;
            if !state.loading {
                return state.clone();
            }
        }

        self.run_pass(&self.state).await;
        self.state.read().await.clone()
    }

    /// Discards the cached snapshot and fetches a new one.
    ///
    /// The previous snapshot keeps serving readers until the new pass
    /// finishes, then the replacement is published wholesale. Field groups
    /// are never merged across two passes, so a resource that fails on
    /// refresh comes back empty rather than stale.
    pub async fn refresh(&self) -> Arc<Snapshot> {
        let _gate = self.load_gate.lock().await;

        let staging = Arc::new(RwLock::new(Arc::new(Snapshot::initial())));
        self.run_pass(&staging).await;

        let fresh = staging.read().await.clone();
        *self.state.write().await = fresh.clone();
        fresh
    }

    // ── One-off fetches ──────────────────────────────────────────────────
    //
    // Strict variants of the snapshot field groups: any transport or
    // conversion failure surfaces instead of being absorbed.

    pub async fn coins(&self) -> Result<Vec<Coin>, SdkError> {
        let resp = self.source.listings().await?;
        let (coins, defect) = normalize_listings(resp, &mut rand::thread_rng());
        match defect {
            Some(err) => Err(err.into()),
            None => Ok(coins),
        }
    }

    pub async fn global_stats(&self) -> Result<GlobalStats, SdkError> {
        Ok(self.source.global().await?.try_into()?)
    }

    pub async fn fear_greed(&self) -> Result<FearGreed, SdkError> {
        let resp = self.source.fear_greed().await?;
        let entry = resp
            .data
            .into_iter()
            .next()
            .ok_or_else(|| SdkError::Other("sentiment feed returned no entries".to_string()))?;
        Ok(entry.try_into()?)
    }

    pub async fn search_index(&self) -> Result<Vec<SearchEntry>, SdkError> {
        Ok(self
            .source
            .search_index()
            .await?
            .into_iter()
            .map(SearchEntry::from)
            .collect())
    }

    pub async fn last_updated(&self) -> Result<DateTime<Utc>, SdkError> {
        Ok(self.source.meta().await?.updated_at)
    }

    // ── Load pass ────────────────────────────────────────────────────────

    /// Runs one fetch pass into `target`.
    ///
    /// The five attempts are isolated: each publishes its field group as
    /// soon as it settles, an unavailable resource leaves its group
    /// untouched, and `loading` flips to false exactly once at the end.
    async fn run_pass(&self, target: &RwLock<Arc<Snapshot>>) {
        let listings = async {
            match self.source.listings().await {
                Ok(resp) => {
                    let (coins, defect) = normalize_listings(resp, &mut rand::thread_rng());
                    tracing::debug!(resource = %Resource::Listings, count = coins.len(), "resource settled");
                    publish(target, move |snap| snap.coins = coins).await;
                    if let Some(err) = defect {
                        tracing::error!(%err, "listing row rejected mid-batch");
                        publish(target, |snap| {
                            snap.error = Some(LOAD_DEFECT_MESSAGE.to_string());
                        })
                        .await;
                    }
                }
                Err(err) => {
                    tracing::warn!(resource = %Resource::Listings, %err, "resource unavailable");
                }
            }
        };

        let global = async {
            match self.source.global().await {
                Ok(resp) => match GlobalStats::try_from(resp) {
                    Ok(stats) => {
                        tracing::debug!(resource = %Resource::Global, "resource settled");
                        publish(target, move |snap| snap.global = Some(stats)).await;
                    }
                    Err(err) => {
                        tracing::warn!(resource = %Resource::Global, %err, "resource unavailable");
                    }
                },
                Err(err) => {
                    tracing::warn!(resource = %Resource::Global, %err, "resource unavailable");
                }
            }
        };

        let fear_greed = async {
            match self.source.fear_greed().await {
                Ok(resp) => match resp.data.into_iter().next().map(FearGreed::try_from) {
                    Some(Ok(reading)) => {
                        tracing::debug!(resource = %Resource::FearGreed, "resource settled");
                        publish(target, move |snap| snap.fear_greed = Some(reading)).await;
                    }
                    Some(Err(err)) => {
                        tracing::warn!(resource = %Resource::FearGreed, %err, "resource unavailable");
                    }
                    None => {
                        tracing::warn!(resource = %Resource::FearGreed, "resource unavailable");
                    }
                },
                Err(err) => {
                    tracing::warn!(resource = %Resource::FearGreed, %err, "resource unavailable");
                }
            }
        };

        let meta = async {
            match self.source.meta().await {
                Ok(resp) => {
                    tracing::debug!(resource = %Resource::Meta, "resource settled");
                    publish(target, move |snap| snap.last_updated = Some(resp.updated_at)).await;
                }
                Err(err) => {
                    tracing::warn!(resource = %Resource::Meta, %err, "resource unavailable");
                }
            }
        };

        let search = async {
            match self.source.search_index().await {
                Ok(entries) => {
                    let index: Vec<SearchEntry> =
                        entries.into_iter().map(SearchEntry::from).collect();
                    tracing::debug!(resource = %Resource::SearchIndex, count = index.len(), "resource settled");
                    publish(target, move |snap| snap.search_index = index).await;
                }
                Err(err) => {
                    tracing::warn!(resource = %Resource::SearchIndex, %err, "resource unavailable");
                }
            }
        };

        tokio::join!(listings, global, fear_greed, meta, search);

        publish(target, |snap| snap.loading = false).await;
    }
}

impl<S: Clone> Clone for CoinboardClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            state: self.state.clone(),
            load_gate: self.load_gate.clone(),
        }
    }
}

/// Clone-and-swap one field group into the shared snapshot.
async fn publish<F: FnOnce(&mut Snapshot)>(target: &RwLock<Arc<Snapshot>>, update: F) {
    let mut guard = target.write().await;
    let mut next = Snapshot::clone(guard.as_ref());
    update(&mut next);
    *guard = Arc::new(next);
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinboardClientBuilder {
    base_url: String,
    timeout: Duration,
    retry: RetryConfig,
}

impl Default for CoinboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DATA_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
        }
    }
}

impl CoinboardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> CoinboardClient<CoinboardHttp> {
        CoinboardClient::with_source(CoinboardHttp::with_config(
            &self.base_url,
            self.timeout,
            self.retry,
        ))
    }
}
