//! Wire types for the listings resource.

use serde::{Deserialize, Serialize};

/// Raw listings payload: `{ "data": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub data: Vec<ListingEntry>,
}

/// One raw listing row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingEntry {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub cmc_rank: u32,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    pub quote: QuoteMap,
}

/// Per-currency quote wrapper; the feed only carries USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteMap {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

/// Raw USD quote block.
///
/// Absent numerics stay `None` here; defaulting happens in one place
/// during conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsdQuote {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub percent_change_1h: Option<f64>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_entry() {
        let json = r#"{
            "data": [{
                "id": 1,
                "name": "Bitcoin",
                "symbol": "BTC",
                "slug": "bitcoin",
                "cmc_rank": 1,
                "circulating_supply": 19800000,
                "total_supply": 21000000,
                "max_supply": 21000000,
                "quote": {
                    "USD": {
                        "price": 98542.31,
                        "percent_change_1h": 0.12,
                        "percent_change_24h": 2.45,
                        "percent_change_7d": 5.67,
                        "market_cap": 1945000000000,
                        "volume_24h": 42500000000
                    }
                }
            }]
        }"#;
        let resp: ListingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].slug, "bitcoin");
        assert_eq!(resp.data[0].quote.usd.price, Some(98542.31));
    }

    #[test]
    fn test_absent_numerics_stay_none() {
        let json = r#"{
            "data": [{
                "id": 5426,
                "name": "Solana",
                "symbol": "SOL",
                "slug": "solana",
                "cmc_rank": 5,
                "max_supply": null,
                "quote": { "USD": { "price": 187.2 } }
            }]
        }"#;
        let resp: ListingsResponse = serde_json::from_str(json).unwrap();
        let entry = &resp.data[0];
        assert_eq!(entry.max_supply, None);
        assert_eq!(entry.circulating_supply, None);
        assert_eq!(entry.quote.usd.percent_change_1h, None);
    }
}
