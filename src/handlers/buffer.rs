//! In-memory sink shared between clones

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Debug, Default)]
struct BufferState {
    bytes: Vec<u8>,
    writes: usize,
}

/// A cloneable `io::Write` that appends into one shared buffer
///
/// Hand one clone to a [`ConsoleHandler`](super::ConsoleHandler) and keep
/// another to read back what was written.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    state: Arc<Mutex<BufferState>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.state.lock().bytes).into_owned()
    }

    /// Number of `write` calls received
    pub fn write_count(&self) -> usize {
        self.state.lock().writes
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().bytes.is_empty()
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.bytes.clear();
        state.writes = 0;
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock();
        state.bytes.extend_from_slice(buf);
        state.writes += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
