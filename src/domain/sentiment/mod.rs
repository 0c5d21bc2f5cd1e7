//! Fear/greed sentiment index.

mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sentiment reading on the 0–100 fear/greed scale. Singleton per
/// snapshot; independent of the coin listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FearGreed {
    pub value: u8,
    pub classification: String,
    pub timestamp: DateTime<Utc>,
}

impl FearGreed {
    /// Band label for a scale value, used when the source omits one.
    pub fn band_label(value: u8) -> &'static str {
        match value {
            0..=25 => "Extreme Fear",
            26..=45 => "Fear",
            46..=55 => "Neutral",
            56..=75 => "Greed",
            _ => "Extreme Greed",
        }
    }
}
