//! Reportable lexer errors.
//!
//! The scanner never fails: bad input shows up as `Illegal` tokens and as
//! [`EncodingIssue`]s on the [`SourceBuffer`]. This module turns both into
//! [`LexError`] values a front-end can print, without changing the token
//! stream.

use crate::source_buffer::{EncodingIssue, EncodingIssueKind};
use crate::{SourceBuffer, Span, Token, TokenKind};

/// A lexer error located in the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A byte no lexical rule accepts.
    #[error("illegal character `{}`", .byte.escape_ascii())]
    IllegalCharacter { byte: u8 },
    /// Null byte inside the source.
    #[error("null byte in source")]
    InteriorNull,
    /// UTF-8 byte order mark at the start of the source.
    #[error("source starts with a UTF-8 byte order mark")]
    Utf8Bom,
    /// UTF-16 byte order mark: the file is not a byte-oriented text file.
    #[error("source starts with a UTF-16 byte order mark")]
    Utf16Bom,
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    /// One-line hint for fixing the error, if there is a useful one.
    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::IllegalCharacter { byte } if byte >= 0x80 => {
                Some("only ASCII letters, digits, and operators are recognized")
            }
            LexErrorKind::IllegalCharacter { .. } => None,
            LexErrorKind::InteriorNull => Some("remove the null byte"),
            LexErrorKind::Utf8Bom => Some("save the file without a byte order mark"),
            LexErrorKind::Utf16Bom => Some("save the file as ASCII or UTF-8"),
        }
    }
}

impl From<EncodingIssue> for LexError {
    fn from(issue: EncodingIssue) -> Self {
        let kind = match issue.kind {
            EncodingIssueKind::Utf8Bom => LexErrorKind::Utf8Bom,
            EncodingIssueKind::Utf16LeBom | EncodingIssueKind::Utf16BeBom => {
                LexErrorKind::Utf16Bom
            }
            EncodingIssueKind::InteriorNull => LexErrorKind::InteriorNull,
        };
        LexError::new(issue.span(), kind)
    }
}

/// Collect every error for a scanned buffer, sorted by source position.
///
/// One error per `Illegal` token and one per encoding issue. A null byte is
/// reported once, as [`LexErrorKind::InteriorNull`]. Bytes covered by a BOM
/// are not reported again as illegal characters.
pub fn collect_errors(source: &SourceBuffer, tokens: &[Token<'_>]) -> Vec<LexError> {
    let issues = source.encoding_issues();
    let bom_end = issues
        .iter()
        .filter(|i| i.kind != EncodingIssueKind::InteriorNull)
        .map(|i| i.pos + i.len)
        .max()
        .unwrap_or(0);

    let mut errors: Vec<LexError> = issues.iter().copied().map(LexError::from).collect();

    errors.extend(
        tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Illegal)
            .filter(|t| t.span().start >= bom_end)
            .filter_map(|t| match t.text() {
                [0] => None,
                &[byte] => Some(LexError::new(
                    t.span(),
                    LexErrorKind::IllegalCharacter { byte },
                )),
                _ => None,
            }),
    );

    errors.sort_by_key(|e| (e.span.start, e.span.end));
    errors
}
