//! Domain model (ids, payloads, envelope, errors, exit classes).

pub mod encoded;
pub mod envelope;
pub mod errors;
pub mod exit_code;
pub mod ids;
pub mod io_type;
pub mod metric;
pub mod time;

pub use self::encoded::EncodedEvent;
pub use self::envelope::{MetricEnvelope, Source};
pub use self::errors::{MetricsError, SinkError};
pub use self::exit_code::{ExitClass, METRICS_FAILED_CODE};
pub use self::ids::{GroupName, Name, NameMarker, RetryId, TaskName};
pub use self::io_type::IoType;
pub use self::metric::{GroupMetrics, Metric, MetricPayload, TaskIoMetrics, TransferKind};
