//! phpw
//!
//! One-pass PHP source emitter. A [`PhpWriter`] exposes a chain of
//! `emit_*`, `begin_*` and `end_*` calls and writes correctly indented text
//! for each of them straight to a [`Sink`]. Nothing is parsed or checked
//! beyond the structure the calls themselves describe.
//!
//! # Modules
//!
//! - [`writer`]: the indentation-tracking engine
//! - [`literal`]: `var_export`-style rendering of scalar values
//! - [`keywords`]: visibility and type-kind keywords
//! - [`config`]: indent unit and line ending
//!
//! Sinks live in the `phpw_io` crate and are re-exported here.

pub mod config;
mod error;
pub mod keywords;
pub mod literal;
pub mod writer;

pub use config::{EmitConfig, LineEnding, INDENT_WIDTH};
pub use error::EmitError;
pub use keywords::{TypeKind, Visibility};
pub use literal::Literal;
pub use phpw_io::{FileSink, Sink, SinkError, StringSink};
pub use writer::PhpWriter;
