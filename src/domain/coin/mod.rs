//! Coin domain — normalized market listings and the synthetic trend line.

mod convert;
pub mod sparkline;
pub mod wire;

pub use convert::normalize_listings;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// Number of points in a synthesized trend line.
pub const SPARKLINE_POINTS: usize = 24;

/// A normalized market listing for one coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub cmc_id: u64,
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub logo_url: String,
    pub price: f64,
    pub change_1h: f64,
    pub change_24h: f64,
    pub change_7d: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub circulating_supply: f64,
    /// `None` means the source reports no total supply (unbounded/unknown).
    pub total_supply: Option<f64>,
    /// `None` means the coin has no supply cap.
    pub max_supply: Option<f64>,
    /// Synthesized 7-day trend line; aesthetic only, not price history.
    pub sparkline: Vec<f64>,
}
