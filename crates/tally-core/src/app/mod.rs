//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **EventBuilder**: payload を envelope に包んで encode（本体）
//! - **Emitter**: builder + EventSink
//! - **Supervisor**: MetricsError → プロセス終了コード

pub mod builder;
pub mod emitter;
pub mod supervisor;

pub use self::builder::EventBuilder;
pub use self::emitter::Emitter;
