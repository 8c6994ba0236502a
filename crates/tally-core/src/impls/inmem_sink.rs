//! InMemoryEventSink - テスト・開発用の sink
//!
//! emit された順に encode 済みイベントを溜めるだけ。

use crate::domain::EncodedEvent;
use crate::domain::SinkError;
use crate::ports::EventSink;
use std::sync::Arc;
use tokio::sync::Mutex;

/// InMemoryEventSink は受け取ったイベントを保持する
///
/// Clone すると同じバッファを共有します（emitter に渡した後でも中身を見られる）。
#[derive(Clone, Default)]
pub struct InMemoryEventSink {
    events: Arc<Mutex<Vec<EncodedEvent>>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub async fn events(&self) -> Vec<EncodedEvent> {
        self.events.lock().await.clone()
    }

    /// Removes and returns everything emitted so far.
    pub async fn drain(&self) -> Vec<EncodedEvent> {
        std::mem::take(&mut *self.events.lock().await)
    }
}

#[async_trait::async_trait]
impl EventSink for InMemoryEventSink {
    async fn emit(&self, event: EncodedEvent) -> Result<(), SinkError> {
        self.events.lock().await.push(event);
        Ok(())
    }
}
