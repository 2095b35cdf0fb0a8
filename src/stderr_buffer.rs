use std::io;
use std::sync::{Mutex, PoisonError};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Activate buffering. While active, log lines are stored instead of
/// being printed to stderr.
pub fn activate() {
    *BUFFER.lock().unwrap_or_else(PoisonError::into_inner) = Some(Vec::new());
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    BUFFER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .unwrap_or_default()
}

/// Write a message. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    let mut guard = BUFFER.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// `io::Write` sink that hands each completed log record to [`warn`].
///
/// The subscriber creates one writer per event, so the record is emitted
/// when the writer is dropped.
#[derive(Debug, Default)]
pub struct BufferedWriter {
    pending: Vec<u8>,
}

impl io::Write for BufferedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for BufferedWriter {
    fn drop(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let msg = String::from_utf8_lossy(&self.pending).trim_end().to_string();
        warn(msg);
    }
}

/// Writer factory for `tracing_subscriber::fmt().with_writer(...)`
pub fn writer() -> BufferedWriter {
    BufferedWriter::default()
}
