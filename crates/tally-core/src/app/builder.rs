//! EventBuilder - envelope の組み立てと encode
//!
//! # 流れ
//! 1. clock から現在時刻を取る（呼び出し側は時刻を渡せない）
//! 2. payload 自身に `metric_type()` を聞く（builder は variant で分岐しない）
//! 3. envelope を組み立てて JSON に encode
//!
//! Encoding is all-or-nothing. A failure comes back as
//! [`MetricsError::Encode`], which is fatal: the supervisor maps it to the
//! reserved metrics exit code.

use crate::domain::{EncodedEvent, IoType, Metric, MetricEnvelope, MetricsError, Source};
use crate::ports::{Clock, SystemClock};

/// EventBuilder は payload を envelope に包んで encode する
///
/// Stateless apart from its clock, so one builder can be shared across
/// threads and tasks.
///
/// # 使用例
/// ```ignore
/// let builder = EventBuilder::new();
/// let source = Source::new("ingest-worker-3")?;
/// let bytes = builder.build(&source, &group_metrics, IoType::Metrics)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBuilder<C = SystemClock> {
    clock: C,
}

impl EventBuilder<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> EventBuilder<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Stamps `metric` into an envelope without encoding it.
    pub fn envelope<M: Metric + Clone>(
        &self,
        source: &Source,
        metric: &M,
        io_type: IoType,
    ) -> MetricEnvelope<M> {
        MetricEnvelope::stamp(source.clone(), self.clock.now(), metric.clone(), io_type)
    }

    /// Encodes an already stamped envelope. Same envelope, same bytes.
    pub fn encode<M: Metric>(&self, envelope: &MetricEnvelope<M>) -> Result<EncodedEvent, MetricsError> {
        // 空の discriminator は collector 側で振り分けられない
        if envelope.metric_type().is_empty() {
            return Err(MetricsError::EmptyMetricType);
        }
        serde_json::to_vec(envelope)
            .map(EncodedEvent::from_json)
            .map_err(|source| MetricsError::Encode {
                metric_type: envelope.metric().metric_type(),
                source,
            })
    }

    /// `BuildEvent(source, payload, channel)`.
    pub fn build<M: Metric>(
        &self,
        source: &Source,
        metric: &M,
        io_type: IoType,
    ) -> Result<EncodedEvent, MetricsError> {
        // payload は借用のまま encode する（clone 不要）
        let envelope = MetricEnvelope::stamp(source.clone(), self.clock.now(), metric, io_type);
        self.encode(&envelope)
    }
}
