//! Ports - 抽象化レイヤー
//!
//! 外部（時計、ID 採番、イベントの受け渡し先）へのインターフェース。
//! 実装は `impls` に置きます。

pub mod clock;
pub mod event_sink;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
