//! Hand-written scanner producing [`Token`]s.
//!
//! The scanner operates on a [`Cursor`] and produces one token per call with
//! zero heap allocation: every token borrows its lexeme from the input.
//!
//! # Design
//!
//! Whitespace is skipped first, then the current byte is dispatched. Each arm
//! calls a focused method that advances the cursor past exactly the bytes it
//! accepts and returns the token. Unrecognized bytes become
//! [`TokenKind::Illegal`] tokens instead of errors, so every call either
//! consumes at least one byte or returns `EndOfInput`.
//!
//! Once the input is exhausted the scanner keeps returning `EndOfInput`.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::{Span, Token, TokenKind};

/// Forward-only scanner over a borrowed input.
///
/// Not meant to be shared: `next_token` takes `&mut self`.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned on the first byte of `source`.
    ///
    /// `source` may be empty. No encoding validation is performed.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Self {
        Self {
            cursor: Cursor::new(source.as_ref()),
        }
    }

    /// Produce the next token.
    ///
    /// Returns `TokenKind::EndOfInput` with empty text once the source is
    /// exhausted. Subsequent calls continue to return `EndOfInput`.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();

        let Some(byte) = self.cursor.current() else {
            return self.eof(start);
        };

        let token = match byte {
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'+' => self.single(start, TokenKind::Plus),
            b'-' => self.single(start, TokenKind::Minus),
            b'*' => self.single(start, TokenKind::Asterisk),
            b'/' => self.single(start, TokenKind::Slash),
            b'<' => self.single(start, TokenKind::LessThan),
            b'>' => self.single(start, TokenKind::GreaterThan),
            b',' => self.single(start, TokenKind::Comma),
            b';' => self.single(start, TokenKind::Semicolon),
            b'(' => self.single(start, TokenKind::LParen),
            b')' => self.single(start, TokenKind::RParen),
            b'{' => self.single(start, TokenKind::LBrace),
            b'}' => self.single(start, TokenKind::RBrace),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.integer(start),
            // NUL, control bytes, unused punctuation, and every non-ASCII byte
            _ => self.illegal(start, byte),
        };

        trace!(kind = ?token.kind(), span = %token.span(), "token");
        token
    }

    /// Returns `true` when the cursor sits at the end of input.
    ///
    /// Trailing whitespace is only consumed by the next call to
    /// [`next_token`](Self::next_token), which then returns `EndOfInput`.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Current byte offset into the input.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    // ─── EOF ──────────────────────────────────────────────────────

    fn eof(&self, start: usize) -> Token<'a> {
        Token::new(
            TokenKind::EndOfInput,
            self.cursor.slice(start, start),
            span(start, start),
        )
    }

    // ─── Operators & Delimiters ───────────────────────────────────

    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.finish(start, kind)
    }

    fn equal(&mut self, start: usize) -> Token<'a> {
        if self.cursor.peek() == Some(b'=') {
            self.cursor.advance(); // consume first '='
            self.cursor.advance(); // consume second '='
            self.finish(start, TokenKind::Equal)
        } else {
            self.single(start, TokenKind::Assign)
        }
    }

    fn bang(&mut self, start: usize) -> Token<'a> {
        if self.cursor.peek() == Some(b'=') {
            self.cursor.advance(); // consume '!'
            self.cursor.advance(); // consume '='
            self.finish(start, TokenKind::NotEqual)
        } else {
            self.single(start, TokenKind::Bang)
        }
    }

    // ─── Identifiers & Integers ───────────────────────────────────

    /// Maximal run of ASCII letters and underscores, resolved against the
    /// keyword table. Digits end the run: `foo1` is `foo` then `1`.
    fn identifier(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(is_ident_byte);
        let text = self.cursor.slice_from(start);
        self.finish(start, keywords::lookup_ident(text))
    }

    /// Maximal run of ASCII digits. No sign, fraction, exponent, or
    /// leading-zero rule.
    fn integer(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.finish(start, TokenKind::Integer)
    }

    // ─── Errors ───────────────────────────────────────────────────

    fn illegal(&mut self, start: usize, byte: u8) -> Token<'a> {
        debug!(byte, pos = start, "illegal character");
        self.single(start, TokenKind::Illegal)
    }

    /// Build a token spanning `start` to the current position.
    #[inline]
    fn finish(&self, start: usize, kind: TokenKind) -> Token<'a> {
        let end = self.cursor.pos();
        Token::new(kind, self.cursor.slice(start, end), span(start, end))
    }
}

/// Bytes that start and continue an identifier.
#[inline]
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Byte offsets past `u32::MAX` saturate.
#[inline]
fn span(start: usize, end: usize) -> Span {
    let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
    Span::new(clamp(start), clamp(end))
}

/// Yields every token before `EndOfInput`, then `None` forever.
impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan `source` to completion.
///
/// The returned tokens always end with exactly one `EndOfInput`.
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        tokens.push(tok);
        if tok.is_eof() {
            break;
        }
    }
    tokens
}
