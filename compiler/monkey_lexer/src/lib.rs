//! Scanner for the Monkey scripting language.
//!
//! Converts raw source bytes into a forward-only stream of [`Token`]s for a
//! downstream parser. The scanner never fails: bytes no rule accepts become
//! [`TokenKind::Illegal`] tokens, and [`lex_error::collect_errors`] turns
//! those into reportable errors when a front-end wants them.
//!
//! ```
//! use monkey_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind(), TokenKind::Let);
//! assert_eq!(scanner.next_token().text(), b"five");
//! ```
//!
//! Input is treated as single bytes; there is no Unicode handling.

mod cursor;
pub mod keywords;
pub mod lex_error;
mod scanner;
pub mod source_buffer;
mod span;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
