//! # Coinboard SDK
//!
//! Rust SDK for the Coinboard market dashboard: fetches the dashboard's
//! five data resources, normalizes their wire shapes into canonical
//! records, and aggregates them into one shared market snapshot.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, wire shapes, conversions
//! 2. **HTTP** — `CoinboardHttp` with per-resource retry and timeout
//! 3. **High-Level Client** — `CoinboardClient` with the shared snapshot
//!    and single-flight loading
//!
//! Every resource is fetched independently; a dashboard with four of five
//! resources available degrades gracefully instead of showing nothing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard_sdk::prelude::*;
//!
//! let client = CoinboardClient::builder()
//!     .base_url("https://coinboard.app")
//!     .build();
//!
//! let snapshot = client.load().await;
//! let movers = snapshot.movers();
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants and resource paths.
pub mod network;

/// The aggregated market snapshot.
pub mod snapshot;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry, and the resource-source abstraction.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinboardClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt::{
        format_compact_usd, format_count, format_price, format_signed_percent,
    };
    pub use crate::shared::CoinId;

    // Domain types
    pub use crate::domain::coin::{sparkline, Coin, SPARKLINE_POINTS};
    pub use crate::domain::global::GlobalStats;
    pub use crate::domain::movers::{movers, MarketMovers, MOVERS_LEN};
    pub use crate::domain::search::SearchEntry;
    pub use crate::domain::sentiment::FearGreed;
    pub use crate::domain::NormalizeError;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{Resource, DEFAULT_DATA_URL};

    // HTTP client + source abstraction
    pub use crate::http::{CoinboardHttp, MarketSource, RetryConfig};

    // High-level client + snapshot
    pub use crate::client::{CoinboardClient, CoinboardClientBuilder};
    pub use crate::snapshot::Snapshot;
}
