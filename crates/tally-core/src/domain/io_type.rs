//! IoType - envelope の channel タグ

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical category an envelope belongs to (`IOType` on the wire).
///
/// Only `METRICS` exists today. New categories are added as new variants.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IoType {
    #[default]
    Metrics,
}

impl IoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IoType::Metrics => "METRICS",
        }
    }
}

impl fmt::Display for IoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_type_serializes_as_required_name() {
        let s = serde_json::to_string(&IoType::Metrics).unwrap();
        assert_eq!(s, "\"METRICS\"");
        assert_eq!(s.trim_matches('"'), IoType::Metrics.as_str());
    }

    #[test]
    fn unknown_io_type_is_rejected() {
        let r: Result<IoType, _> = serde_json::from_str("\"LOGS\"");
        assert!(r.is_err());
    }
}
