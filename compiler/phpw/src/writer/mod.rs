//! PHP Writer
//!
//! Emission engine that turns a sequence of declaration calls into
//! indented PHP source, written straight through to a [`Sink`].
//!
//! # Indentation
//!
//! The writer tracks a nesting depth. `begin_type`/`begin_method` raise it
//! after writing their opening brace; `end_type`/`end_method` lower it
//! before writing the closing brace. Indented fragments are prefixed with
//! the indent unit repeated once per level, computed when the fragment is
//! written.
//!
//! The writer also tracks whether the sink sits at the start of a line.
//! Indentation is only written there, so modifiers like `abstract ` and the
//! declaration that follows them share one indented line.

use std::fmt;

use phpw_io::{Sink, StringSink};

use crate::config::EmitConfig;
use crate::{EmitError, Literal, TypeKind, Visibility};

/// Indentation-tracking PHP source writer.
///
/// Every operation returns the writer again so calls chain with `?`:
///
/// ```
/// use phpw::{PhpWriter, TypeKind};
///
/// # fn main() -> Result<(), phpw::EmitError> {
/// let mut writer = PhpWriter::in_memory();
/// writer
///     .emit_namespace("App")?
///     .begin_type("Foo", TypeKind::Class, None, &[])?
///     .end_type()?;
/// assert_eq!(writer.output(), "namespace App;\n\nclass Foo\n{\n}\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PhpWriter<S: Sink = StringSink> {
    sink: S,
    indent_level: usize,
    config: EmitConfig,
    at_line_start: bool,
}

impl PhpWriter<StringSink> {
    /// Create a writer over a fresh in-memory sink.
    pub fn in_memory() -> Self {
        Self::new(StringSink::new())
    }

    /// Everything emitted so far.
    pub fn output(&self) -> &str {
        self.sink.as_str()
    }
}

impl Default for PhpWriter<StringSink> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: Sink> PhpWriter<S> {
    /// Create a writer with the default config.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, EmitConfig::default())
    }

    /// Create a writer with a specific config.
    pub fn with_config(sink: S, config: EmitConfig) -> Self {
        Self {
            sink,
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Get the current nesting depth.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give up the sink without checking nesting.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Check that every block was closed, flush, and return the sink.
    pub fn finish(mut self) -> Result<S, EmitError> {
        if self.indent_level > 0 {
            return Err(EmitError::UnclosedBlocks {
                depth: self.indent_level,
            });
        }
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// `namespace <name>;` followed by a blank line.
    pub fn emit_namespace(&mut self, namespace: &str) -> Result<&mut Self, EmitError> {
        let nl = self.newline();
        self.write(&format!("namespace {namespace};{nl}{nl}"))?;
        Ok(self)
    }

    /// `use <class>;` or `use <class> as <alias>;`.
    pub fn emit_import(&mut self, class: &str, alias: Option<&str>) -> Result<&mut Self, EmitError> {
        let nl = self.newline();
        let line = match alias {
            Some(alias) => format!("use {class} as {alias};{nl}"),
            None => format!("use {class};{nl}"),
        };
        self.write(&line)?;
        Ok(self)
    }

    /// `abstract `, prefixing the next type or method on the same line.
    pub fn emit_abstract(&mut self) -> Result<&mut Self, EmitError> {
        self.write_modifier("abstract ")
    }

    /// `final `, prefixing the next type or method on the same line.
    pub fn emit_final(&mut self) -> Result<&mut Self, EmitError> {
        self.write_modifier("final ")
    }

    /// Open a class, interface, or trait body.
    ///
    /// # Errors
    ///
    /// Traits cannot extend or implement: passing `extends` or a non-empty
    /// `implements` with [`TypeKind::Trait`] fails before writing anything.
    #[tracing::instrument(level = "trace", skip_all, fields(name = %name, kind = %kind, depth = self.indent_level))]
    pub fn begin_type(
        &mut self,
        name: &str,
        kind: TypeKind,
        extends: Option<&str>,
        implements: &[&str],
    ) -> Result<&mut Self, EmitError> {
        if kind == TypeKind::Trait && (extends.is_some() || !implements.is_empty()) {
            return Err(EmitError::TraitSupertypes {
                name: name.to_owned(),
            });
        }

        let mut header = format!("{kind} {name}");
        if let Some(parent) = extends {
            header.push_str(" extends ");
            header.push_str(parent);
        }
        if !implements.is_empty() {
            header.push_str(" implements ");
            header.push_str(&implements.join(", "));
        }

        self.write_line(&header)?;
        self.write_line("{")?;
        self.indent_level += 1;
        Ok(self)
    }

    /// Close the innermost type body.
    pub fn end_type(&mut self) -> Result<&mut Self, EmitError> {
        self.close_block("end_type")?;
        Ok(self)
    }

    /// `const <name> = <value>;`, with `value` written as given.
    pub fn emit_constant(
        &mut self,
        name: &str,
        value: impl fmt::Display,
    ) -> Result<&mut Self, EmitError> {
        self.write_line(&format!("const {name} = {value};"))?;
        Ok(self)
    }

    /// `<visibility>[ static] $<name>[ = <init>];`
    pub fn emit_property(
        &mut self,
        name: &str,
        visibility: Visibility,
        is_static: bool,
        init: Option<Literal>,
    ) -> Result<&mut Self, EmitError> {
        let modifier = if is_static { " static" } else { "" };
        let statement = match init {
            Some(init) => format!("{visibility}{modifier} ${name} = {init};"),
            None => format!("{visibility}{modifier} ${name};"),
        };
        self.write_line(&statement)?;
        Ok(self)
    }

    /// `use <trait>;` inside a type body.
    pub fn emit_use_trait(&mut self, name: &str) -> Result<&mut Self, EmitError> {
        self.emit_use_traits(&[name])
    }

    /// `use <t1>, <t2>, ...;` inside a type body.
    pub fn emit_use_traits(&mut self, traits: &[&str]) -> Result<&mut Self, EmitError> {
        if traits.is_empty() {
            return Err(EmitError::NoTraits);
        }
        self.write_line(&format!("use {};", traits.join(", ")))?;
        Ok(self)
    }

    /// Open a method body.
    ///
    /// Positional `args` come first, then `defaults` in the order given,
    /// each rendered as `$name = <literal>`.
    #[tracing::instrument(level = "trace", skip_all, fields(name = %name, depth = self.indent_level))]
    pub fn begin_method(
        &mut self,
        name: &str,
        visibility: Visibility,
        args: &[&str],
        defaults: &[(&str, Literal)],
        is_static: bool,
    ) -> Result<&mut Self, EmitError> {
        let params = args
            .iter()
            .map(|arg| format!("${arg}"))
            .chain(
                defaults
                    .iter()
                    .map(|(arg, default)| format!("${arg} = {default}")),
            )
            .collect::<Vec<_>>()
            .join(", ");
        let modifier = if is_static { " static" } else { "" };

        self.write_line(&format!("{visibility}{modifier} function {name}({params})"))?;
        self.write_line("{")?;
        self.indent_level += 1;
        Ok(self)
    }

    /// Close the innermost method body.
    pub fn end_method(&mut self) -> Result<&mut Self, EmitError> {
        self.close_block("end_method")?;
        Ok(self)
    }

    /// `<body>;`
    pub fn emit_statement(&mut self, body: &str) -> Result<&mut Self, EmitError> {
        self.write_line(&format!("{body};"))?;
        Ok(self)
    }

    /// A `/** ... */` block with one ` * ` line per entry.
    ///
    /// Empty and whitespace-only entries both render as a bare ` *`.
    ///
    /// # Errors
    ///
    /// The block must start its own line: after `emit_abstract` or
    /// `emit_final` it fails with [`EmitError::NotAtLineStart`] and writes
    /// nothing.
    pub fn emit_doc_comment(&mut self, lines: &[&str]) -> Result<&mut Self, EmitError> {
        if !self.at_line_start {
            return Err(EmitError::NotAtLineStart {
                op: "emit_doc_comment",
            });
        }
        let nl = self.newline();
        let indent = self.config.indent_for(self.indent_level);

        let mut block = indent.clone();
        block.push_str("/**");
        block.push_str(nl);
        for line in lines {
            block.push_str(&indent);
            if line.trim().is_empty() {
                block.push_str(" *");
            } else {
                block.push_str(" * ");
                block.push_str(line);
            }
            block.push_str(nl);
        }
        block.push_str(&indent);
        block.push_str(" */");
        block.push_str(nl);

        self.write(&block)?;
        Ok(self)
    }

    /// An empty line.
    pub fn emit_newline(&mut self) -> Result<&mut Self, EmitError> {
        let nl = self.newline();
        self.write(nl)?;
        Ok(self)
    }

    fn newline(&self) -> &'static str {
        self.config.line_ending.as_str()
    }

    /// Indentation owed before the next fragment; empty mid-line.
    fn line_prefix(&self) -> String {
        if self.at_line_start {
            self.config.indent_for(self.indent_level)
        } else {
            String::new()
        }
    }

    fn write(&mut self, text: &str) -> Result<(), EmitError> {
        if text.is_empty() {
            return Ok(());
        }
        self.sink.write(text)?;
        self.at_line_start = text.ends_with('\n');
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), EmitError> {
        let line = format!("{}{text}{}", self.line_prefix(), self.newline());
        self.write(&line)
    }

    fn write_modifier(&mut self, keyword: &str) -> Result<&mut Self, EmitError> {
        let text = format!("{}{keyword}", self.line_prefix());
        self.write(&text)?;
        Ok(self)
    }

    fn close_block(&mut self, op: &'static str) -> Result<(), EmitError> {
        if self.indent_level == 0 {
            return Err(EmitError::Unbalanced { op });
        }
        self.indent_level -= 1;
        tracing::trace!(op, depth = self.indent_level, "closing block");
        self.write_line("}")
    }
}
