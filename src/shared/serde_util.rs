//! Custom serde helpers for feed wire formats.

/// Deserializes a Unix-seconds value sent as a decimal string into
/// `DateTime<Utc>`.
///
/// The sentiment feed sends `timestamp` as a string of epoch seconds, not
/// ISO 8601.
pub mod timestamp_secs_str {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let secs: i64 = raw
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid timestamp: {raw}")))?;
        DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(with = "super::timestamp_secs_str")]
        timestamp: DateTime<Utc>,
    }

    #[test]
    fn test_parses_unix_seconds_string() {
        let probe: Probe = serde_json::from_str(r#"{"timestamp": "1733000000"}"#).unwrap();
        assert_eq!(probe.timestamp.timestamp(), 1_733_000_000);
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        let result = serde_json::from_str::<Probe>(r#"{"timestamp": "soon"}"#);
        assert!(result.is_err());
    }
}
