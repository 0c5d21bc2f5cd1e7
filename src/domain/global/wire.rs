//! Wire types for the global aggregates resource.

use serde::{Deserialize, Serialize};

/// Raw global payload: `{ "data": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalResponse {
    pub data: GlobalEntry,
}

/// Raw global aggregate block. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalEntry {
    #[serde(default)]
    pub btc_dominance: Option<f64>,
    #[serde(default)]
    pub eth_dominance: Option<f64>,
    #[serde(default)]
    pub active_cryptocurrencies: Option<u64>,
    #[serde(default)]
    pub quote: Option<GlobalQuoteMap>,
}

/// Per-currency quote wrapper; the feed only carries USD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalQuoteMap {
    #[serde(rename = "USD", default)]
    pub usd: Option<GlobalUsdQuote>,
}

/// Raw USD totals block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalUsdQuote {
    #[serde(default)]
    pub total_market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume_24h: Option<f64>,
    #[serde(default)]
    pub total_market_cap_yesterday_percentage_change: Option<f64>,
}
