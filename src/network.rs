//! Network constants and resource paths for the Coinboard data feed.

use std::fmt;

/// Default base URL the dashboard's data resources are served from.
pub const DEFAULT_DATA_URL: &str = "https://coinboard.app";

/// CDN base for coin logo images; the numeric listing id is appended.
pub const COIN_IMAGE_URL: &str = "https://s2.coinmarketcap.com/static/img/coins/64x64";

/// One independently fetched dashboard resource.
///
/// Every resource is read-only and may be absent without affecting the
/// others; the snapshot field it maps to simply stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Listings,
    Global,
    FearGreed,
    Meta,
    SearchIndex,
}

impl Resource {
    /// Path of the resource relative to the data base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Listings => "/data/listings.json",
            Self::Global => "/data/global.json",
            Self::FearGreed => "/data/fear-greed.json",
            Self::Meta => "/data/meta.json",
            Self::SearchIndex => "/data/search-index.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listings => "listings",
            Self::Global => "global",
            Self::FearGreed => "fear-greed",
            Self::Meta => "meta",
            Self::SearchIndex => "search-index",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
