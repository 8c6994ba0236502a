//! WriterSink - 1 行 1 イベントで `io::Write` に書き出す sink
//!
//! CLI では stdout に使います。ログは stderr に出るので混ざりません。

use crate::domain::EncodedEvent;
use crate::domain::SinkError;
use crate::ports::EventSink;
use std::io::Write;
use std::sync::Mutex;

/// WriterSink は encode 済みイベントを改行区切りで書き出す
///
/// Each event is written and flushed under one lock, so lines from
/// concurrent emitters never interleave.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer.into_inner().map_err(|_| SinkError::Closed)
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> EventSink for WriterSink<W> {
    async fn emit(&self, event: EncodedEvent) -> Result<(), SinkError> {
        // 書き込みは短いので blocking のまま行う
        let mut writer = self.writer.lock().map_err(|_| SinkError::Closed)?;
        writer.write_all(event.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
