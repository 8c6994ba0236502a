//! EncodedEvent - encode 済みの envelope

use std::fmt;

use serde::de::DeserializeOwned;

use super::envelope::MetricEnvelope;
use super::errors::MetricsError;
use super::metric::{Metric, MetricPayload};

/// Encoded envelope bytes (UTF-8 JSON, one document).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedEvent {
    bytes: Vec<u8>,
}

impl EncodedEvent {
    /// `bytes` must be the output of `serde_json`.
    pub(crate) fn from_json(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn as_str(&self) -> &str {
        // serde_json only ever produces UTF-8
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decodes back into an envelope (collector side / tests).
    pub fn decode<M: DeserializeOwned>(&self) -> Result<MetricEnvelope<M>, MetricsError> {
        serde_json::from_slice(&self.bytes).map_err(MetricsError::Decode)
    }

    /// Decodes into a concrete record, checking that `MetricType` names it.
    pub fn decode_metric<M: Metric + DeserializeOwned>(
        &self,
    ) -> Result<MetricEnvelope<M>, MetricsError> {
        let envelope = self.decode::<M>()?;
        let expected = envelope.metric().metric_type();
        if envelope.metric_type() != expected {
            return Err(MetricsError::MetricTypeMismatch {
                expected,
                found: envelope.metric_type().to_string(),
            });
        }
        Ok(envelope)
    }

    /// Decodes whichever payload `MetricType` names.
    pub fn decode_payload(&self) -> Result<MetricEnvelope<MetricPayload>, MetricsError> {
        self.decode::<serde_json::Value>()?
            .try_map_metric(MetricPayload::from_tagged)
    }
}

impl fmt::Debug for EncodedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedEvent").field(&self.as_str()).finish()
    }
}

impl fmt::Display for EncodedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<[u8]> for EncodedEvent {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::fixtures;
    use crate::domain::{GroupMetrics, TaskIoMetrics};

    fn raw(metric_type: &str, metric: serde_json::Value) -> EncodedEvent {
        let doc = serde_json::json!({
            "Source": "w",
            "Time": "2025-01-01T00:10:00Z",
            "Metric": metric,
            "IOType": "METRICS",
            "MetricType": metric_type,
        });
        EncodedEvent::from_json(serde_json::to_vec(&doc).unwrap())
    }

    #[test]
    fn decode_payload_follows_metric_type() {
        let event = raw("task_io_metrics", serde_json::to_value(fixtures::task_io()).unwrap());
        let env = event.decode_payload().unwrap();
        assert_eq!(env.metric_type(), "task_io_metrics");
        assert_eq!(env.source().as_str(), "w");
        assert_eq!(env.into_metric(), MetricPayload::TaskIo(fixtures::task_io()));
    }

    #[test]
    fn decode_payload_rejects_unknown_metric_type() {
        let event = raw("cpu_metrics", serde_json::json!({}));
        let err = event.decode_payload().unwrap_err();
        assert!(matches!(err, MetricsError::UnknownMetricType(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn decode_metric_rejects_a_mismatched_tag() {
        // group の body に task_io のタグ
        let event = raw("task_io_metrics", serde_json::to_value(fixtures::group()).unwrap());
        assert!(event.decode::<GroupMetrics>().is_ok());

        let err = event.decode_metric::<GroupMetrics>().unwrap_err();
        assert!(matches!(
            err,
            MetricsError::MetricTypeMismatch { expected: "group_metrics", ref found } if found == "task_io_metrics"
        ));
        assert!(event.decode_payload().is_err());
    }

    #[test]
    fn decode_metric_accepts_a_matching_tag() {
        let event = raw("task_io_metrics", serde_json::to_value(fixtures::task_io()).unwrap());
        let env = event.decode_metric::<TaskIoMetrics>().unwrap();
        assert_eq!(env.metric(), &fixtures::task_io());
    }
}
