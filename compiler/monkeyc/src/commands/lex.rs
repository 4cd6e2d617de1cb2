//! `monkey lex <file>`: dump a file's token stream and report lex errors.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use monkey_lexer::lex_error::collect_errors;
use monkey_lexer::{tokenize, SourceBuffer};
use tracing::info;

use super::read_file;
use crate::config::CliConfig;
use crate::diagnostics::{LineOffsetTable, TerminalEmitter};
use crate::Result;

/// Counts reported by a `lex` run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens emitted, including the final `EndOfInput`.
    pub tokens: usize,
    pub errors: usize,
}

impl LexSummary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Lex a file, printing tokens to stdout and errors to stderr.
pub fn lex_file(path: &Path, config: &CliConfig) -> Result<LexSummary> {
    let content = read_file(path)?;
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(stderr.lock(), config.color, is_tty);
    let stdout = io::stdout();
    let summary = lex_source(
        &path.display().to_string(),
        &content,
        &mut stdout.lock(),
        &mut emitter,
    )?;
    emitter.flush();
    Ok(summary)
}

/// Lex `source`, writing the token listing to `out` and errors to `emitter`.
///
/// `label` names the source in the listing header and error locations.
pub fn lex_source<W: Write, E: Write>(
    label: &str,
    source: &[u8],
    out: &mut W,
    emitter: &mut TerminalEmitter<E>,
) -> Result<LexSummary> {
    let buffer = SourceBuffer::new(source);
    let tokens = tokenize(buffer.as_bytes());

    writeln!(out, "Tokens for '{label}' ({} tokens):", tokens.len())?;
    for tok in &tokens {
        writeln!(out, "  {tok:?}")?;
    }
    out.flush()?;

    let errors = collect_errors(&buffer, &tokens);
    if !errors.is_empty() {
        let lines = LineOffsetTable::build(buffer.as_bytes());
        emitter.emit_all(&errors, label, &lines);
        emitter.emit_summary(errors.len());
    }

    info!(
        source = label,
        tokens = tokens.len(),
        errors = errors.len(),
        "lexed source"
    );
    Ok(LexSummary {
        tokens: tokens.len(),
        errors: errors.len(),
    })
}
