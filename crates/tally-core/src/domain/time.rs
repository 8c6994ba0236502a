//! Timestamp formatting at the wire boundary.
//!
//! Timestamps stay `DateTime<Utc>` everywhere in the crate and are only turned
//! into text here: RFC 3339, UTC, `Z` suffix, sub-second digits only when
//! present (`2025-01-01T00:00:00Z`, `2025-01-01T00:00:00.250Z`).

use chrono::{DateTime, SecondsFormat, Utc};

/// Canonical text form of a timestamp.
pub fn format_rfc3339(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `#[serde(with = "rfc3339")]`
pub mod rfc3339 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_rfc3339(at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|at| at.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("invalid RFC 3339 timestamp {s:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamp {
        #[serde(with = "rfc3339")]
        at: DateTime<Utc>,
    }

    #[rstest]
    #[case(0, "2025-01-01T00:00:00Z")]
    #[case(250_000_000, "2025-01-01T00:00:00.250Z")]
    #[case(123_456, "2025-01-01T00:00:00.000123456Z")]
    fn formats_with_auto_precision(#[case] nanos: u32, #[case] expected: &str) {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(nanos as i64);
        assert_eq!(format_rfc3339(&at), expected);
    }

    #[test]
    fn parses_offsets_into_utc() {
        let s: Stamp = serde_json::from_str(r#"{"at":"2025-01-01T09:00:00+09:00"}"#).unwrap();
        assert_eq!(s.at, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let r: Result<Stamp, _> = serde_json::from_str(r#"{"at":"yesterday"}"#);
        assert!(r.is_err());
    }
}
