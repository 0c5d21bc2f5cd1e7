//! Global market aggregates.

mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Market-wide totals shown in the dashboard header. Singleton per
/// snapshot; absent until its resource loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_market_cap: f64,
    pub total_volume_24h: f64,
    /// Bitcoin's share of total market cap, in percent.
    pub btc_dominance: f64,
    /// Ether's share of total market cap, in percent.
    pub eth_dominance: f64,
    pub active_coins: u64,
    /// Day-over-day percent change of total market cap.
    pub market_cap_change_24h: f64,
}
