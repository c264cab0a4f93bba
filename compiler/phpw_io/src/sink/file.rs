//! File-backed sink.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::Sink;
use crate::SinkError;

/// Sink that streams output to a file.
///
/// The file is opened once at construction, either appending to existing
/// content or truncating it. Output is buffered; call [`Sink::close`] to
/// make it durable. Dropping an unclosed sink still flushes, but any error
/// from that flush is lost.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    /// Open an existing file for writing.
    ///
    /// With `append` set, output goes after any existing content; otherwise
    /// the file is truncated.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::NotWritable`] without opening anything if the
    /// file is missing, is a directory, or this process may not write it.
    /// Returns [`SinkError::Open`] if opening fails for any other reason.
    pub fn open<P: AsRef<Path>>(path: P, append: bool) -> Result<Self, SinkError> {
        let path = path.as_ref();
        if !is_writable_file(path) {
            return Err(not_writable(path));
        }
        Self::open_with(path, append, false)
    }

    /// Open `path` in append mode, the default.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        Self::open(path, true)
    }

    /// Open `path`, discarding any existing content.
    pub fn truncate<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        Self::open(path, false)
    }

    /// Like [`FileSink::open`], but a missing file is created.
    ///
    /// A missing target needs a directory this process may write into.
    pub fn create<P: AsRef<Path>>(path: P, append: bool) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let writable = match fs::symlink_metadata(path) {
            Ok(_) => is_writable_file(path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => is_writable_dir(parent_dir(path)),
            Err(_) => false,
        };
        if !writable {
            return Err(not_writable(path));
        }
        Self::open_with(path, append, true)
    }

    fn open_with(path: &Path, append: bool, create: bool) -> Result<Self, SinkError> {
        let mut options = OpenOptions::new();
        options.create(create);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options.open(path).map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), append, create, "opened file sink");

        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Path this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether [`Sink::close`] has released the handle.
    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>, SinkError> {
        self.writer.as_mut().ok_or(SinkError::Closed)
    }
}

impl Sink for FileSink {
    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        self.writer()?
            .write_all(text.as_bytes())
            .map_err(SinkError::Write)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer()?.flush().map_err(SinkError::Flush)
    }

    /// A failed flush leaves the handle open, so the caller may retry.
    fn close(&mut self) -> Result<(), SinkError> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        writer.flush().map_err(SinkError::Flush)?;

        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        let file = writer
            .into_inner()
            .map_err(|err| SinkError::Close(err.into_error()))?;
        match file.sync_all() {
            Ok(()) => {}
            // Character devices reject fsync with EINVAL.
            Err(err) if err.kind() == io::ErrorKind::InvalidInput => {}
            Err(err) => return Err(SinkError::Close(err)),
        }
        tracing::debug!(path = %self.path.display(), "closed file sink");
        Ok(())
    }
}

fn not_writable(path: &Path) -> SinkError {
    SinkError::NotWritable {
        path: path.to_path_buf(),
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// An existing non-directory the process is allowed to write.
fn is_writable_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.is_dir()) && can_write(path)
}

fn is_writable_dir(dir: &Path) -> bool {
    fs::metadata(dir).is_ok_and(|meta| meta.is_dir()) && can_write(dir)
}

/// Ask the OS rather than reading permission bits, so ownership and
/// privileges are taken into account.
#[cfg(unix)]
fn can_write(path: &Path) -> bool {
    rustix::fs::access(path, rustix::fs::Access::WRITE_OK).is_ok()
}

#[cfg(not(unix))]
fn can_write(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.permissions().readonly())
}
