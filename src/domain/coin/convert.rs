//! Conversion: raw listing rows → `Coin`.

use super::sparkline;
use super::wire::{ListingEntry, ListingsResponse};
use super::Coin;
use crate::domain::{check_finite, non_negative, or_zero, NormalizeError};
use crate::network::COIN_IMAGE_URL;
use rand::Rng;

impl Coin {
    /// Canonicalizes one raw listing row.
    ///
    /// The RNG drives only the synthesized trend line; every other field
    /// is a deterministic function of the input.
    pub fn from_entry<R: Rng>(entry: ListingEntry, rng: &mut R) -> Result<Self, NormalizeError> {
        if entry.cmc_rank == 0 {
            return Err(NormalizeError::ZeroRank);
        }

        let quote = entry.quote.usd;
        let price = non_negative("price", or_zero("price", quote.price)?)?;
        let change_1h = or_zero("percent_change_1h", quote.percent_change_1h)?;
        let change_24h = or_zero("percent_change_24h", quote.percent_change_24h)?;
        let change_7d = or_zero("percent_change_7d", quote.percent_change_7d)?;
        let market_cap = non_negative("market_cap", or_zero("market_cap", quote.market_cap)?)?;
        let volume_24h = non_negative("volume_24h", or_zero("volume_24h", quote.volume_24h)?)?;
        let circulating_supply = non_negative(
            "circulating_supply",
            or_zero("circulating_supply", entry.circulating_supply)?,
        )?;
        let total_supply = supply_cap("total_supply", entry.total_supply)?;
        let max_supply = supply_cap("max_supply", entry.max_supply)?;

        Ok(Coin {
            id: entry.slug.into(),
            cmc_id: entry.id,
            rank: entry.cmc_rank,
            name: entry.name,
            symbol: entry.symbol,
            logo_url: format!("{}/{}.png", COIN_IMAGE_URL, entry.id),
            price,
            change_1h,
            change_24h,
            change_7d,
            market_cap,
            volume_24h,
            circulating_supply,
            total_supply,
            max_supply,
            sparkline: sparkline::synthesize_with(change_7d, rng),
        })
    }
}

/// Canonicalizes listing rows in order, stopping at the first rejected
/// entry. Rows converted before the rejection are kept.
pub fn normalize_listings<R: Rng>(
    resp: ListingsResponse,
    rng: &mut R,
) -> (Vec<Coin>, Option<NormalizeError>) {
    let mut coins = Vec::with_capacity(resp.data.len());
    for entry in resp.data {
        match Coin::from_entry(entry, rng) {
            Ok(coin) => coins.push(coin),
            Err(err) => return (coins, Some(err)),
        }
    }
    (coins, None)
}

/// Supply caps keep absence: `None` means uncapped/unknown, never zero.
fn supply_cap(field: &'static str, value: Option<f64>) -> Result<Option<f64>, NormalizeError> {
    value
        .map(|v| non_negative(field, check_finite(field, v)?))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::wire::{QuoteMap, UsdQuote};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn minimal_entry() -> ListingEntry {
        ListingEntry {
            id: 1,
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            slug: "bitcoin".to_string(),
            cmc_rank: 1,
            circulating_supply: Some(19_800_000.0),
            total_supply: Some(21_000_000.0),
            max_supply: Some(21_000_000.0),
            quote: QuoteMap {
                usd: UsdQuote {
                    price: Some(98_542.31),
                    percent_change_1h: Some(0.12),
                    percent_change_24h: Some(2.45),
                    percent_change_7d: Some(5.67),
                    market_cap: Some(1.945e12),
                    volume_24h: Some(4.25e10),
                },
            },
        }
    }

    #[test]
    fn test_missing_change_defaults_to_zero() {
        let mut entry = minimal_entry();
        entry.quote.usd.percent_change_1h = None;
        let coin = Coin::from_entry(entry, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(coin.change_1h, 0.0);
    }

    #[test]
    fn test_missing_max_supply_stays_none() {
        let mut entry = minimal_entry();
        entry.max_supply = None;
        let coin = Coin::from_entry(entry, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(coin.max_supply, None);
        assert_ne!(coin.total_supply, Some(0.0));
    }

    #[test]
    fn test_logo_url_derived_from_id() {
        let coin = Coin::from_entry(minimal_entry(), &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(coin.logo_url.ends_with("/1.png"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut entry = minimal_entry();
        entry.quote.usd.price = Some(-1.0);
        let err = Coin::from_entry(entry, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, NormalizeError::Negative { field: "price", .. }));
    }

    #[test]
    fn test_nan_change_rejected() {
        let mut entry = minimal_entry();
        entry.quote.usd.percent_change_7d = Some(f64::NAN);
        let err = Coin::from_entry(entry, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, NormalizeError::NotFinite { .. }));
    }

    #[test]
    fn test_zero_rank_rejected() {
        let mut entry = minimal_entry();
        entry.cmc_rank = 0;
        let err = Coin::from_entry(entry, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, NormalizeError::ZeroRank);
    }

    #[test]
    fn test_conversion_is_idempotent_for_same_seed() {
        let resp = ListingsResponse {
            data: vec![minimal_entry(), minimal_entry()],
        };
        let (a, _) = normalize_listings(resp.clone(), &mut StdRng::seed_from_u64(9));
        let (b, _) = normalize_listings(resp, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_batch_keeps_rows_before_rejection() {
        let mut bad = minimal_entry();
        bad.slug = "badcoin".to_string();
        bad.quote.usd.market_cap = Some(-5.0);
        let resp = ListingsResponse {
            data: vec![minimal_entry(), bad, minimal_entry()],
        };
        let (coins, err) = normalize_listings(resp, &mut StdRng::seed_from_u64(0));
        assert_eq!(coins.len(), 1);
        assert!(err.is_some());
    }
}
