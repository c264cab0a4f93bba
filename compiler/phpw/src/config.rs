//! Emitter configuration.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Line terminator written after each line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    /// Unix-style `\n` (default).
    #[default]
    Lf,

    /// Windows-style `\r\n`.
    CrLf,
}

impl LineEnding {
    /// The terminator text.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration for the emitter.
///
/// Only affects whitespace: the indent unit and the line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitConfig {
    /// Indentation size in spaces per nesting level.
    pub indent_size: usize,

    /// Terminator for every emitted line.
    pub line_ending: LineEnding,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_size: INDENT_WIDTH,
            line_ending: LineEnding::Lf,
        }
    }
}

impl EmitConfig {
    /// Create a new config with the specified indent size.
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self {
            indent_size,
            ..Default::default()
        }
    }

    /// Create a new config with the specified line ending.
    pub fn with_line_ending(line_ending: LineEnding) -> Self {
        Self {
            line_ending,
            ..Default::default()
        }
    }

    /// Leading whitespace for the given nesting depth.
    pub fn indent_for(&self, level: usize) -> String {
        " ".repeat(level * self.indent_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_php_conventions() {
        let config = EmitConfig::default();
        assert_eq!(config.indent_size, 4);
        assert_eq!(config.line_ending, LineEnding::Lf);
        assert_eq!(config.indent_for(2), "        ");
    }

    #[test]
    fn custom_indent_size() {
        let config = EmitConfig::with_indent_size(2);
        assert_eq!(config.indent_for(0), "");
        assert_eq!(config.indent_for(3), "      ");
        assert_eq!(config.line_ending, LineEnding::Lf);
    }

    #[test]
    fn crlf_terminator() {
        let config = EmitConfig::with_line_ending(LineEnding::CrLf);
        assert_eq!(config.line_ending.as_str(), "\r\n");
        assert_eq!(config.indent_size, INDENT_WIDTH);
    }
}
