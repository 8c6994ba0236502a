//! Impls - ports の実装（プロセス内のみ）
//!
//! # 含まれる実装
//! - **InMemoryEventSink**: テスト・開発用
//! - **WriterSink**: 1 行 1 イベントで `io::Write` へ（CLI の stdout など）
//!
//! collector への送信はこの crate の外で行います。

pub mod inmem_sink;
pub mod writer_sink;

pub use self::inmem_sink::InMemoryEventSink;
pub use self::writer_sink::WriterSink;
