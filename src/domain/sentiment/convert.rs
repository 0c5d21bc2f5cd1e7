//! Conversion: FearGreedEntry → FearGreed.

use super::wire;
use super::FearGreed;
use crate::domain::NormalizeError;

impl TryFrom<wire::FearGreedEntry> for FearGreed {
    type Error = NormalizeError;

    /// A value that does not parse to an integer in 0..=100 rejects the
    /// whole record; the caller treats that like an unavailable resource
    /// rather than keeping an invalid reading.
    fn try_from(source: wire::FearGreedEntry) -> Result<Self, Self::Error> {
        let value: u8 = source
            .value
            .trim()
            .parse()
            .ok()
            .filter(|v| *v <= 100)
            .ok_or_else(|| NormalizeError::SentimentOutOfRange(source.value.clone()))?;

        let classification = match source.value_classification {
            Some(label) if !label.is_empty() => label,
            _ => FearGreed::band_label(value).to_string(),
        };

        Ok(FearGreed {
            value,
            classification,
            timestamp: source.timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(value: &str, classification: Option<&str>) -> wire::FearGreedEntry {
        wire::FearGreedEntry {
            value: value.to_string(),
            value_classification: classification.map(str::to_string),
            timestamp: Utc.timestamp_opt(1_733_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_parses_textual_value() {
        let fg = FearGreed::try_from(entry("72", Some("Greed"))).unwrap();
        assert_eq!(fg.value, 72);
        assert_eq!(fg.classification, "Greed");
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let err = FearGreed::try_from(entry("panic", Some("Fear"))).unwrap_err();
        assert!(matches!(err, NormalizeError::SentimentOutOfRange(_)));
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        assert!(FearGreed::try_from(entry("101", None)).is_err());
        assert!(FearGreed::try_from(entry("-3", None)).is_err());
        assert!(FearGreed::try_from(entry("7.5", None)).is_err());
    }

    #[test]
    fn test_missing_classification_uses_band() {
        let fg = FearGreed::try_from(entry("18", None)).unwrap();
        assert_eq!(fg.classification, "Extreme Fear");
        let fg = FearGreed::try_from(entry("60", Some(""))).unwrap();
        assert_eq!(fg.classification, "Greed");
    }
}
