//! Errors - エラー型と分類
//!
//! Every error knows its [`ExitClass`]. Encoding failures (including an empty
//! discriminator) are fatal: a payload that cannot be encoded is a bug in that
//! payload type, so nothing retries it and the supervisor ends the process
//! with the reserved metrics exit code.

use thiserror::Error;

use super::exit_code::ExitClass;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The envelope could not be encoded.
    #[error("failed to encode metric envelope (metric_type={metric_type}): {source}")]
    Encode {
        metric_type: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The payload reported an empty discriminator.
    #[error("metric type must not be empty")]
    EmptyMetricType,

    #[error("failed to decode metric envelope: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unknown metric type: {0:?}")]
    UnknownMetricType(String),

    #[error("metric type mismatch (expected={expected}, found={found})")]
    MetricTypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("source must not be empty")]
    EmptySource,

    #[error("event sink failed: {0}")]
    Sink(#[from] SinkError),

    #[error("logging init failed: {0}")]
    Logging(String),
}

impl MetricsError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            MetricsError::Encode { .. } => "metrics_encode",
            MetricsError::EmptyMetricType => "empty_metric_type",
            MetricsError::Decode(_) => "metrics_decode",
            MetricsError::UnknownMetricType(_) => "unknown_metric_type",
            MetricsError::MetricTypeMismatch { .. } => "metric_type_mismatch",
            MetricsError::EmptySource => "empty_source",
            MetricsError::Sink(_) => "metrics_sink",
            MetricsError::Logging(_) => "logging_init",
        }
    }

    /// Fatal errors must end the process; they are never retried.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MetricsError::Encode { .. } | MetricsError::EmptyMetricType
        )
    }

    pub fn exit_class(&self) -> ExitClass {
        match self {
            MetricsError::Encode { .. } | MetricsError::EmptyMetricType => ExitClass::MetricsFailed,
            MetricsError::Decode(_)
            | MetricsError::UnknownMetricType(_)
            | MetricsError::MetricTypeMismatch { .. }
            | MetricsError::Sink(_) => ExitClass::Failure,
            MetricsError::EmptySource | MetricsError::Logging(_) => ExitClass::InvalidConfig,
        }
    }
}

/// SinkError は EventSink の操作エラー
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("sink closed")]
    Closed,
}
