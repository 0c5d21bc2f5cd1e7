//! HTTP layer — `CoinboardHttp` and the `MarketSource` abstraction.

pub mod client;
pub mod retry;

pub use client::CoinboardHttp;
pub use retry::RetryConfig;

use crate::domain::coin::wire::ListingsResponse;
use crate::domain::global::wire::GlobalResponse;
use crate::domain::meta::wire::MetaResponse;
use crate::domain::search::wire::SearchEntryResponse;
use crate::domain::sentiment::wire::FearGreedResponse;
use crate::error::HttpError;

/// The five independently fetchable dashboard resources.
///
/// `CoinboardHttp` is the production implementation; tests drive the load
/// pipeline through stub sources with canned outcomes.
#[allow(async_fn_in_trait)]
pub trait MarketSource {
    async fn listings(&self) -> Result<ListingsResponse, HttpError>;
    async fn global(&self) -> Result<GlobalResponse, HttpError>;
    async fn fear_greed(&self) -> Result<FearGreedResponse, HttpError>;
    async fn meta(&self) -> Result<MetaResponse, HttpError>;
    async fn search_index(&self) -> Result<Vec<SearchEntryResponse>, HttpError>;
}

impl MarketSource for CoinboardHttp {
    async fn listings(&self) -> Result<ListingsResponse, HttpError> {
        self.get_listings().await
    }

    async fn global(&self) -> Result<GlobalResponse, HttpError> {
        self.get_global().await
    }

    async fn fear_greed(&self) -> Result<FearGreedResponse, HttpError> {
        self.get_fear_greed().await
    }

    async fn meta(&self) -> Result<MetaResponse, HttpError> {
        self.get_meta().await
    }

    async fn search_index(&self) -> Result<Vec<SearchEntryResponse>, HttpError> {
        self.get_search_index().await
    }
}
