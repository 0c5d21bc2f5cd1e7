//! Conversion: GlobalResponse → GlobalStats.

use super::wire;
use super::GlobalStats;
use crate::domain::{non_negative, or_zero, NormalizeError};

impl TryFrom<wire::GlobalResponse> for GlobalStats {
    type Error = NormalizeError;

    fn try_from(source: wire::GlobalResponse) -> Result<Self, Self::Error> {
        let entry = source.data;
        let usd = entry.quote.and_then(|q| q.usd).unwrap_or_default();

        Ok(GlobalStats {
            total_market_cap: non_negative(
                "total_market_cap",
                or_zero("total_market_cap", usd.total_market_cap)?,
            )?,
            total_volume_24h: non_negative(
                "total_volume_24h",
                or_zero("total_volume_24h", usd.total_volume_24h)?,
            )?,
            btc_dominance: non_negative(
                "btc_dominance",
                or_zero("btc_dominance", entry.btc_dominance)?,
            )?,
            eth_dominance: non_negative(
                "eth_dominance",
                or_zero("eth_dominance", entry.eth_dominance)?,
            )?,
            active_coins: entry.active_cryptocurrencies.unwrap_or(0),
            market_cap_change_24h: or_zero(
                "total_market_cap_yesterday_percentage_change",
                usd.total_market_cap_yesterday_percentage_change,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> wire::GlobalResponse {
        wire::GlobalResponse {
            data: wire::GlobalEntry {
                btc_dominance: Some(57.3),
                eth_dominance: Some(12.8),
                active_cryptocurrencies: Some(9_944),
                quote: Some(wire::GlobalQuoteMap {
                    usd: Some(wire::GlobalUsdQuote {
                        total_market_cap: Some(3.4e12),
                        total_volume_24h: Some(1.1e11),
                        total_market_cap_yesterday_percentage_change: Some(-0.8),
                    }),
                }),
            },
        }
    }

    #[test]
    fn test_full_conversion() {
        let stats = GlobalStats::try_from(full_response()).unwrap();
        assert_eq!(stats.total_market_cap, 3.4e12);
        assert_eq!(stats.btc_dominance, 57.3);
        assert_eq!(stats.active_coins, 9_944);
        assert_eq!(stats.market_cap_change_24h, -0.8);
    }

    #[test]
    fn test_missing_quote_defaults_to_zero() {
        let mut resp = full_response();
        resp.data.quote = None;
        let stats = GlobalStats::try_from(resp).unwrap();
        assert_eq!(stats.total_market_cap, 0.0);
        assert_eq!(stats.total_volume_24h, 0.0);
        // dominance comes from the outer block, unaffected
        assert_eq!(stats.btc_dominance, 57.3);
    }

    #[test]
    fn test_negative_total_rejected() {
        let mut resp = full_response();
        resp.data.quote = Some(wire::GlobalQuoteMap {
            usd: Some(wire::GlobalUsdQuote {
                total_market_cap: Some(-1.0),
                ..Default::default()
            }),
        });
        let err = GlobalStats::try_from(resp).unwrap_err();
        assert!(matches!(err, NormalizeError::Negative { .. }));
    }
}
