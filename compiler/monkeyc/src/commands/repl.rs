//! Interactive token echo loop.
//!
//! Reads one line at a time, scans it with a fresh [`Scanner`], and prints
//! every token up to (not including) `EndOfInput`.

use std::io::{BufRead, Write};

use monkey_lexer::Scanner;
use tracing::debug;

use crate::config::CliConfig;
use crate::Result;

/// Run the REPL until `input` is exhausted.
///
/// Lines are read as raw bytes, so input that is not valid UTF-8 is scanned
/// (into `Illegal` tokens) instead of aborting the loop.
pub fn run_repl<R: BufRead, W: Write>(mut input: R, mut output: W, config: &CliConfig) -> Result<()> {
    let mut line = Vec::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            // Leave the terminal on a fresh line after Ctrl-D.
            writeln!(output)?;
            break;
        }

        let mut count = 0usize;
        for token in Scanner::new(&line) {
            if config.show_spans {
                writeln!(output, "{token:?}")?;
            } else {
                writeln!(output, "{token}")?;
            }
            count += 1;
        }
        debug!(bytes = line.len(), tokens = count, "scanned line");
    }
    Ok(())
}
