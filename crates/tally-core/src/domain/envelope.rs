//! MetricEnvelope - 送信単位
//!
//! An envelope is stamped by `EventBuilder`, encoded right away and dropped.
//! Fields are private: once built it cannot be changed, and in particular its
//! `Time` can only come from the builder's clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::MetricsError;
use super::io_type::IoType;
use super::metric::Metric;
use super::time::rfc3339;

/// Identity of the emitting process or subsystem. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Source(String);

impl Source {
    pub fn new(value: impl Into<String>) -> Result<Self, MetricsError> {
        let value = value.into();
        if value.is_empty() {
            return Err(MetricsError::EmptySource);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Source {
    type Error = MetricsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        source.0
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The unit of emission.
///
/// Wire shape (key order is part of the contract):
/// ```text
/// {"Source":"..","Time":"..","Metric":{..},"IOType":"METRICS","MetricType":".."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEnvelope<M> {
    #[serde(rename = "Source")]
    source: Source,

    #[serde(rename = "Time", with = "rfc3339")]
    time: DateTime<Utc>,

    #[serde(rename = "Metric")]
    metric: M,

    #[serde(rename = "IOType")]
    io_type: IoType,

    #[serde(rename = "MetricType")]
    metric_type: String,
}

impl<M: Metric> MetricEnvelope<M> {
    /// `metric_type` is always taken from the payload itself.
    pub(crate) fn stamp(source: Source, time: DateTime<Utc>, metric: M, io_type: IoType) -> Self {
        let metric_type = metric.metric_type().to_string();
        Self {
            source,
            time,
            metric,
            io_type,
            metric_type,
        }
    }
}

impl<M> MetricEnvelope<M> {
    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn io_type(&self) -> IoType {
        self.io_type
    }

    pub fn metric_type(&self) -> &str {
        &self.metric_type
    }

    pub fn into_metric(self) -> M {
        self.metric
    }

    /// Replaces the payload, keeping every other field as decoded.
    pub(crate) fn try_map_metric<N, E>(
        self,
        f: impl FnOnce(&str, M) -> Result<N, E>,
    ) -> Result<MetricEnvelope<N>, E> {
        let metric = f(&self.metric_type, self.metric)?;
        Ok(MetricEnvelope {
            source: self.source,
            time: self.time,
            metric,
            io_type: self.io_type,
            metric_type: self.metric_type,
        })
    }
}
