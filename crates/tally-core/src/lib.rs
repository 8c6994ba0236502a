//! tally-core
//!
//! Builds the structured metric records that workflow backends emit.
//!
//! # モジュール構成
//! - **domain**: payload（GroupMetrics, TaskIoMetrics）, envelope, ids, errors, exit classes
//! - **ports**: Clock, IdGenerator, EventSink
//! - **app**: EventBuilder（本体）, Emitter, Supervisor
//! - **impls**: InMemoryEventSink, WriterSink
//! - **config** / **observability**: 環境変数と tracing の初期化
//!
//! # 例
//! ```
//! use tally_core::app::EventBuilder;
//! use tally_core::domain::{GroupMetrics, IoType, RetryId, Source};
//! use chrono::{TimeZone, Utc};
//!
//! let metric = GroupMetrics {
//!     retry_id: RetryId::new("r1"),
//!     start_time: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
//!     end_time: Utc.with_ymd_and_hms(2025, 1, 1, 0, 5, 0).unwrap(),
//!     type_of_metrics: "retry-window".to_string(),
//! };
//! let source = Source::new("ingest-worker-3").unwrap();
//! let event = EventBuilder::new().build(&source, &metric, IoType::Metrics).unwrap();
//! assert!(event.as_str().ends_with(r#""IOType":"METRICS","MetricType":"group_metrics"}"#));
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;

pub use app::{Emitter, EventBuilder};
pub use config::MetricsConfig;
pub use domain::{EncodedEvent, ExitClass, Metric, MetricsError};
