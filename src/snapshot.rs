//! The in-memory market snapshot — one load's complete state.

use crate::domain::coin::Coin;
use crate::domain::global::GlobalStats;
use crate::domain::movers::{self, MarketMovers};
use crate::domain::search::SearchEntry;
use crate::domain::sentiment::FearGreed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete market state at a point in time.
///
/// Field groups fill independently as their resources settle; a missing
/// resource leaves its group at the initial empty state. `error` is set
/// only for a defect outside the per-resource isolation, never for an
/// individual unavailable resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Normalized listings, in fetch order (not necessarily rank order).
    pub coins: Vec<Coin>,
    pub global: Option<GlobalStats>,
    pub fear_greed: Option<FearGreed>,
    pub search_index: Vec<SearchEntry>,
    pub last_updated: Option<DateTime<Utc>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Snapshot {
    /// The state a session starts in: empty, loading.
    pub fn initial() -> Self {
        Snapshot {
            loading: true,
            ..Snapshot::default()
        }
    }

    /// Top gainers and losers, derived fresh from the current coins.
    pub fn movers(&self) -> MarketMovers {
        movers::movers(&self.coins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let snap = Snapshot::initial();
        assert!(snap.loading);
        assert!(snap.coins.is_empty());
        assert!(snap.global.is_none());
        assert!(snap.fear_greed.is_none());
        assert!(snap.search_index.is_empty());
        assert!(snap.last_updated.is_none());
        assert!(snap.error.is_none());
    }

    #[test]
    fn test_movers_of_empty_snapshot() {
        let m = Snapshot::initial().movers();
        assert!(m.gainers.is_empty());
        assert!(m.losers.is_empty());
    }
}
