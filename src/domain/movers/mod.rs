//! Derived market movers — top gainers and losers by 24-hour change.

use crate::domain::coin::Coin;
use serde::{Deserialize, Serialize};

/// How many coins each movers list carries.
pub const MOVERS_LEN: usize = 5;

/// Top gainers and losers derived from one coin collection.
///
/// Always recomputed from the snapshot it came from; never cached across
/// distinct collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketMovers {
    pub gainers: Vec<Coin>,
    pub losers: Vec<Coin>,
}

/// Ranks coins by 24-hour change and takes the extremes.
///
/// Pure and total: empty input yields empty lists. Both lists use a stable
/// sort, so coins with identical changes keep their input order.
pub fn movers(coins: &[Coin]) -> MarketMovers {
    let mut gainers: Vec<Coin> = coins.to_vec();
    gainers.sort_by(|a, b| b.change_24h.total_cmp(&a.change_24h));
    gainers.truncate(MOVERS_LEN);

    let mut losers: Vec<Coin> = coins.to_vec();
    losers.sort_by(|a, b| a.change_24h.total_cmp(&b.change_24h));
    losers.truncate(MOVERS_LEN);

    MarketMovers { gainers, losers }
}
