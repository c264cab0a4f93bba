//! Output sinks for the phpw emitter.
//!
//! The emitter writes every fragment it produces through a [`Sink`].
//! Two sinks are provided:
//!
//! - [`StringSink`]: accumulates output in memory
//! - [`FileSink`]: appends to or truncates a file, with an explicit
//!   flush/close lifecycle
//!
//! # Example
//!
//! ```
//! use phpw_io::{Sink, StringSink};
//!
//! let mut sink = StringSink::new();
//! sink.write("<?php\n").unwrap();
//! assert_eq!(sink.as_str(), "<?php\n");
//! ```

mod error;
mod sink;

pub use error::SinkError;
pub use sink::{FileSink, Sink, StringSink};
