//! Command implementations.

mod lex;
mod repl;

use std::path::Path;

pub use lex::{lex_file, lex_source, LexSummary};
pub use repl::run_repl;

use crate::{CliError, Result};

/// Read a source file as raw bytes.
///
/// The scanner does not require UTF-8, so neither does the reader.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}
