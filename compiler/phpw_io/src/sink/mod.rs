//! Sink abstraction and the in-memory sink.

mod file;

pub use file::FileSink;

use crate::SinkError;

/// Destination for emitted text.
///
/// The emitter forwards every fragment through `write`, unmodified and in
/// call order. Implementations decide whether output is kept in memory or
/// made durable.
pub trait Sink {
    /// Append a text fragment.
    fn write(&mut self, text: &str) -> Result<(), SinkError>;

    /// Force buffered output to the underlying storage.
    fn flush(&mut self) -> Result<(), SinkError>;

    /// Flush and release the underlying storage.
    fn close(&mut self) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).write(text)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }

    fn close(&mut self) -> Result<(), SinkError> {
        (**self).close()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).write(text)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }

    fn close(&mut self) -> Result<(), SinkError> {
        (**self).close()
    }
}

/// In-memory sink.
///
/// Builds a string incrementally. Writes never fail; `flush` and `close`
/// do nothing.
#[derive(Debug, Default, Clone)]
pub struct StringSink {
    buffer: String,
}

impl StringSink {
    /// Create an empty string sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Everything written so far, without consuming the sink.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the sink and return the accumulated text.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Sink for StringSink {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}
