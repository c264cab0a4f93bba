//! Sink errors.

use std::io;
use std::path::PathBuf;

/// Error produced by a [`Sink`](crate::Sink).
///
/// `NotWritable` is an argument error raised before any handle is opened.
/// Every other variant is an I/O failure raised at the point it happened;
/// bytes already accepted by the OS stay where they are.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("file {} is not writable", path.display())]
    NotWritable { path: PathBuf },

    #[error("failed to open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing to file failed")]
    Write(#[source] io::Error),

    #[error("flushing file failed")]
    Flush(#[source] io::Error),

    #[error("closing file failed")]
    Close(#[source] io::Error),

    #[error("sink is already closed")]
    Closed,
}

impl SinkError {
    /// Whether the caller passed something unusable, as opposed to the
    /// underlying storage failing.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SinkError::NotWritable { .. })
    }
}
