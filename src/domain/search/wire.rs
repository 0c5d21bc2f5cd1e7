//! Wire types for the search index resource.

use serde::{Deserialize, Serialize};

/// One raw search row; the payload is a bare JSON array of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntryResponse {
    pub id: String,
    #[serde(rename = "cmcId")]
    pub cmc_id: u64,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_camel_case_id() {
        let json = r#"[{"id": "bitcoin", "cmcId": 1, "name": "Bitcoin", "symbol": "BTC", "rank": 1}]"#;
        let entries: Vec<SearchEntryResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].cmc_id, 1);
        assert_eq!(entries[0].symbol, "BTC");
    }
}
