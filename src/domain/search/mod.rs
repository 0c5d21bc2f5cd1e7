//! Search index — lightweight coin projections for lookup.

pub mod wire;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// A coin projection carrying just enough for search and linking, without
/// the full pricing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub id: CoinId,
    pub cmc_id: u64,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
}

impl From<wire::SearchEntryResponse> for SearchEntry {
    fn from(source: wire::SearchEntryResponse) -> Self {
        Self {
            id: source.id.into(),
            cmc_id: source.cmc_id,
            name: source.name,
            symbol: source.symbol,
            rank: source.rank,
        }
    }
}
