//! Wire types for the fear/greed sentiment resource.

use crate::shared::serde_util::timestamp_secs_str;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw sentiment payload: `{ "data": [ ... ] }`; the feed sends a
/// single-entry history.
#[derive(Debug, Clone, Deserialize)]
pub struct FearGreedResponse {
    pub data: Vec<FearGreedEntry>,
}

/// One raw sentiment reading. The upstream feed sends the value and the
/// timestamp as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct FearGreedEntry {
    pub value: String,
    #[serde(default)]
    pub value_classification: Option<String>,
    #[serde(with = "timestamp_secs_str")]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_textual_fields() {
        let json = r#"{
            "data": [{
                "value": "72",
                "value_classification": "Greed",
                "timestamp": "1733000000"
            }]
        }"#;
        let resp: FearGreedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data[0].value, "72");
        assert_eq!(resp.data[0].timestamp.timestamp(), 1_733_000_000);
    }
}
