//! EventSink port - encode 済みイベントの受け渡し先
//!
//! Shipping events to a collector is not this crate's job. A sink is just the
//! seam where encoded bytes leave the builder; the in-process implementations
//! live in `impls`.

use async_trait::async_trait;

use crate::domain::EncodedEvent;
use crate::domain::SinkError;

/// EventSink は encode 済みのイベントを受け取る
///
/// - `Send + Sync`: 複数 task から共有できる
/// - Sink errors are recoverable; the caller decides what to do with them.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: EncodedEvent) -> Result<(), SinkError>;
}

#[async_trait]
impl<S: EventSink + ?Sized> EventSink for std::sync::Arc<S> {
    async fn emit(&self, event: EncodedEvent) -> Result<(), SinkError> {
        (**self).emit(event).await
    }
}
