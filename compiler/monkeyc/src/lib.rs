//! Command-line front-end for the Monkey lexer.
//!
//! Provides the token-echo REPL and the `lex` file dump on top of
//! [`monkey_lexer`]. The binary in `main.rs` only parses arguments and
//! dispatches here.

pub mod commands;
pub mod config;
pub mod diagnostics;
mod error;
pub mod tracing_setup;

pub use error::{CliError, Result};
