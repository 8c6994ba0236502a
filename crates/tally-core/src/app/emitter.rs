//! Emitter - builder と sink をつなぐ接着剤
//!
//! build → sink の順に一件ずつ処理します。encode の失敗は fatal のまま
//! 呼び出し側に返し、sink の失敗は通常のエラーとして返します。

use crate::app::builder::EventBuilder;
use crate::domain::{IoType, Metric, MetricsError, Source};
use crate::ports::{Clock, EventSink, SystemClock};

/// Emitter は一つの source 名で metric を送り出す
///
/// # 使用例
/// ```ignore
/// let emitter = Emitter::new(Source::new("download-worker")?, InMemoryEventSink::new());
/// emitter.emit(&task_io_metrics).await?;
/// ```
pub struct Emitter<S, C = SystemClock> {
    source: Source,
    builder: EventBuilder<C>,
    sink: S,
}

impl<S: EventSink> Emitter<S, SystemClock> {
    pub fn new(source: Source, sink: S) -> Self {
        Self::with_builder(source, EventBuilder::new(), sink)
    }
}

impl<S: EventSink, C: Clock> Emitter<S, C> {
    pub fn with_builder(source: Source, builder: EventBuilder<C>, sink: S) -> Self {
        Self {
            source,
            builder,
            sink,
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Builds and hands one `METRICS` envelope to the sink.
    pub async fn emit<M: Metric + Sync>(&self, metric: &M) -> Result<(), MetricsError> {
        let event = self
            .builder
            .build(&self.source, metric, IoType::Metrics)
            .inspect_err(|e| {
                tracing::error!(
                    source = %self.source,
                    metric_type = metric.metric_type(),
                    error = %e,
                    "metric encoding failed"
                );
            })?;

        tracing::debug!(
            source = %self.source,
            metric_type = metric.metric_type(),
            bytes = event.len(),
            "metric built"
        );

        self.sink.emit(event).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::fixtures;
    use crate::domain::{EncodedEvent, ExitClass, GroupMetrics, SinkError, TaskIoMetrics};
    use crate::impls::InMemoryEventSink;
    use crate::ports::FixedClock;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use serde::{Serialize, Serializer, ser::Error as _};

    fn emitter() -> Emitter<InMemoryEventSink, FixedClock> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        Emitter::with_builder(
            Source::new("download-worker").unwrap(),
            EventBuilder::with_clock(clock),
            InMemoryEventSink::new(),
        )
    }

    #[tokio::test]
    async fn emitted_events_reach_the_sink_in_order() {
        let emitter = emitter();
        emitter.emit(&fixtures::group()).await.unwrap();
        emitter.emit(&fixtures::task_io()).await.unwrap();

        let events = emitter.sink().events().await;
        assert_eq!(events.len(), 2);

        let first = events[0].decode::<GroupMetrics>().unwrap();
        let second = events[1].decode::<TaskIoMetrics>().unwrap();
        assert_eq!(first.metric_type(), "group_metrics");
        assert_eq!(second.metric_type(), "task_io_metrics");
        assert_eq!(second.source().as_str(), "download-worker");
    }

    struct BrokenSink;

    #[async_trait]
    impl EventSink for BrokenSink {
        async fn emit(&self, _event: EncodedEvent) -> Result<(), SinkError> {
            Err(SinkError::Closed)
        }
    }

    #[tokio::test]
    async fn sink_failure_is_not_fatal() {
        let emitter = Emitter::new(Source::new("w").unwrap(), BrokenSink);
        let err = emitter.emit(&fixtures::group()).await.unwrap_err();
        assert!(matches!(err, MetricsError::Sink(SinkError::Closed)));
        assert!(!err.is_fatal());
        assert_eq!(err.exit_class(), ExitClass::Failure);
    }

    #[derive(Clone)]
    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("boom"))
        }
    }

    impl Metric for Unencodable {
        fn metric_type(&self) -> &'static str {
            "unencodable"
        }
    }

    #[tokio::test]
    async fn encode_failure_never_reaches_the_sink() {
        let emitter = emitter();
        let err = emitter.emit(&Unencodable).await.unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.exit_class(), ExitClass::MetricsFailed);
        assert!(emitter.sink().events().await.is_empty());
    }
}
