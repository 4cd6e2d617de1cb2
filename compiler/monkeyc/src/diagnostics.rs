//! Terminal rendering of lexer errors.
//!
//! Human-readable output with optional ANSI color support:
//!
//! ```text
//! error: illegal character `@`
//!   --> main.mk:3:9
//!    = help: only ASCII letters, digits, and operators are recognized
//! ```

use std::io::Write;

use monkey_lexer::LexError;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Parse a `--color=` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Pre-computed line start offsets for byte offset to line/column lookup.
///
/// Lookups binary-search the table, so rendering many errors for one file
/// costs one scan of the source.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source bytes.
    pub fn build(source: &[u8]) -> Self {
        let mut offsets = vec![0u32];
        for (i, &byte) in source.iter().enumerate() {
            if byte == b'\n' {
                // Offsets past u32::MAX cannot be addressed by a span anyway.
                let Ok(next) = u32::try_from(i + 1) else {
                    break;
                };
                offsets.push(next);
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX).saturating_add(1)
    }

    /// Get 1-based `(line, column)` for a byte offset.
    ///
    /// Columns count bytes: the scanner has no notion of characters.
    pub fn offset_to_line_col(&self, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get(line as usize - 1)
            .copied()
            .unwrap_or(0);
        (line, offset - line_start + 1)
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Terminal emitter with optional color support.
///
/// Writes are best-effort: a closed stderr must not abort lexing.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create an emitter. `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Emit a single error located in `path`.
    pub fn emit(&mut self, error: &LexError, path: &str, lines: &LineOffsetTable) {
        let (line, col) = lines.offset_to_line_col(error.span.start);

        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!(": {error}"), colors::BOLD);
        let _ = writeln!(self.writer);

        self.write_colored("  --> ", colors::SECONDARY);
        let _ = writeln!(self.writer, "{path}:{line}:{col}");

        if let Some(help) = error.help() {
            self.write_colored("   = help", colors::HELP);
            let _ = writeln!(self.writer, ": {help}");
        }
    }

    /// Emit every error in order.
    pub fn emit_all(&mut self, errors: &[LexError], path: &str, lines: &LineOffsetTable) {
        for error in errors {
            self.emit(error, path, lines);
        }
    }

    /// Emit a one-line summary. Nothing is written when `error_count` is 0.
    pub fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": lexing produced {error_count} error{}",
            plural_s(error_count)
        );
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
