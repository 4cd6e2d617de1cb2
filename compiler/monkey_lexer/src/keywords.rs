//! Reserved word resolution.
//!
//! The table is a compile-time `match`: it is never mutated and lookups are
//! pure functions of the lexeme. Matching is exact and case-sensitive over
//! the full lexeme, so `lets` and `Let` are identifiers.
//!
//! The lookup uses the lexeme's length as a first-pass filter (keywords are
//! 2-6 bytes), then compares against the keywords of that length.

use crate::TokenKind;

/// Every reserved word with its token kind, in declaration order.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// Look up a reserved word.
///
/// Returns the keyword's `TokenKind`, or `None` for a plain identifier.
#[inline]
pub fn lookup(text: &[u8]) -> Option<TokenKind> {
    if !(2..=6).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            b"fn" => Some(TokenKind::Function),
            b"if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            b"let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            b"true" => Some(TokenKind::True),
            b"else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            b"false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            b"return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve an identifier-class lexeme to its keyword kind or `Identifier`.
#[inline]
pub fn lookup_ident(text: &[u8]) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Identifier)
}
