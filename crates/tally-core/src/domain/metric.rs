//! Metric payloads: the records that go inside an envelope's `Metric` object.
//!
//! The set of payloads is closed ([`MetricPayload`]), but the builder only
//! ever talks to the [`Metric`] trait, so it never branches on which payload
//! it was handed.
//!
//! Field names below are a compatibility contract with downstream collectors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::MetricsError;
use super::ids::{GroupName, RetryId, TaskName};
use super::time::rfc3339;

/// Metric は payload と discriminator (`MetricType`) を対応付ける
///
/// # 使用例
/// ```ignore
/// impl Metric for MyMetrics {
///     fn metric_type(&self) -> &'static str {
///         "my_metrics"
///     }
/// }
/// ```
///
/// The returned tag must be non-empty and must depend only on the payload's
/// type, never on its field values.
pub trait Metric: Serialize {
    fn metric_type(&self) -> &'static str;
}

impl<M: Metric + ?Sized> Metric for &M {
    fn metric_type(&self) -> &'static str {
        (**self).metric_type()
    }
}

/// Lifecycle window of one retry of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMetrics {
    pub retry_id: RetryId,

    #[serde(with = "rfc3339")]
    pub start_time: DateTime<Utc>,

    #[serde(with = "rfc3339")]
    pub end_time: DateTime<Utc>,

    /// Free-form classification chosen by the caller.
    pub type_of_metrics: String,
}

impl GroupMetrics {
    pub const METRIC_TYPE: &'static str = "group_metrics";
}

impl Metric for GroupMetrics {
    fn metric_type(&self) -> &'static str {
        Self::METRIC_TYPE
    }
}

/// Direction (or class) of a data transfer.
///
/// Serialized as a lowercase string; unknown strings are kept as `Other`
/// so collectors can add classes without breaking decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransferKind {
    Upload,
    Download,
    Other(String),
}

impl TransferKind {
    pub fn as_str(&self) -> &str {
        match self {
            TransferKind::Upload => "upload",
            TransferKind::Download => "download",
            TransferKind::Other(s) => s,
        }
    }
}

impl From<String> for TransferKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "upload" => TransferKind::Upload,
            "download" => TransferKind::Download,
            _ => TransferKind::Other(s),
        }
    }
}

impl From<TransferKind> for String {
    fn from(kind: TransferKind) -> Self {
        match kind {
            TransferKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single data-transfer operation performed by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskIoMetrics {
    pub retry_id: RetryId,
    pub group_name: GroupName,
    pub task_name: TaskName,

    /// Resource the transfer targeted (e.g. `s3://bucket/key`).
    pub url: String,

    #[serde(rename = "type")]
    pub transfer: TransferKind,

    #[serde(with = "rfc3339")]
    pub start_time: DateTime<Utc>,

    #[serde(with = "rfc3339")]
    pub end_time: DateTime<Utc>,

    pub size_in_bytes: u64,
    pub number_of_files: u64,

    pub operation_type: String,
    pub download_type: String,
}

impl TaskIoMetrics {
    pub const METRIC_TYPE: &'static str = "task_io_metrics";
}

impl Metric for TaskIoMetrics {
    fn metric_type(&self) -> &'static str {
        Self::METRIC_TYPE
    }
}

/// The closed set of payloads.
///
/// `untagged`: encodes exactly like the wrapped record. The discriminator
/// lives in the envelope's `MetricType`, not inside `Metric`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricPayload {
    Group(GroupMetrics),
    TaskIo(TaskIoMetrics),
}

impl MetricPayload {
    /// Every known discriminator, in declaration order.
    pub const METRIC_TYPES: [&'static str; 2] =
        [GroupMetrics::METRIC_TYPE, TaskIoMetrics::METRIC_TYPE];

    /// Decodes a `Metric` object by the envelope's `MetricType`.
    ///
    /// The body must have the shape of the record the tag names.
    pub fn from_tagged(metric_type: &str, value: serde_json::Value) -> Result<Self, MetricsError> {
        let decoded = match metric_type {
            GroupMetrics::METRIC_TYPE => serde_json::from_value(value).map(MetricPayload::Group),
            TaskIoMetrics::METRIC_TYPE => serde_json::from_value(value).map(MetricPayload::TaskIo),
            other => return Err(MetricsError::UnknownMetricType(other.to_string())),
        };
        decoded.map_err(MetricsError::Decode)
    }
}

impl Metric for MetricPayload {
    fn metric_type(&self) -> &'static str {
        match self {
            MetricPayload::Group(m) => m.metric_type(),
            MetricPayload::TaskIo(m) => m.metric_type(),
        }
    }
}

impl From<GroupMetrics> for MetricPayload {
    fn from(m: GroupMetrics) -> Self {
        MetricPayload::Group(m)
    }
}

impl From<TaskIoMetrics> for MetricPayload {
    fn from(m: TaskIoMetrics) -> Self {
        MetricPayload::TaskIo(m)
    }
}
