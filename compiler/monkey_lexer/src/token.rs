//! Token types produced by the [`Scanner`](crate::Scanner).
//!
//! A [`Token`] borrows its lexeme from the scanned input, so emitting a token
//! never allocates.

use std::borrow::Cow;
use std::fmt;

use crate::Span;

/// Kind of a scanned token.
///
/// Discriminants are grouped by category so related kinds sit in the same
/// numeric range:
///
/// | Range   | Category                  |
/// |---------|---------------------------|
/// | 0-3     | Sentinels and literals    |
/// | 16-25   | Operators                 |
/// | 48-53   | Delimiters                |
/// | 64-70   | Keywords                  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Sentinels and literals ===
    /// A byte no lexical rule accepts.
    Illegal = 0,
    /// End of input. Emitted forever once the input is exhausted.
    EndOfInput = 1,
    /// `add`, `foo_bar`, `x`
    Identifier = 2,
    /// `5`, `10`, `007`
    Integer = 3,

    // === Operators ===
    /// `=`
    Assign = 16,
    /// `+`
    Plus = 17,
    /// `-`
    Minus = 18,
    /// `!`
    Bang = 19,
    /// `*`
    Asterisk = 20,
    /// `/`
    Slash = 21,
    /// `<`
    LessThan = 22,
    /// `>`
    GreaterThan = 23,
    /// `==`
    Equal = 24,
    /// `!=`
    NotEqual = 25,

    // === Delimiters ===
    /// `,`
    Comma = 48,
    /// `;`
    Semicolon = 49,
    /// `(`
    LParen = 50,
    /// `)`
    RParen = 51,
    /// `{`
    LBrace = 52,
    /// `}`
    RBrace = 53,

    // === Keywords ===
    /// `fn`
    Function = 64,
    /// `let`
    Let = 65,
    /// `true`
    True = 66,
    /// `false`
    False = 67,
    /// `if`
    If = 68,
    /// `else`
    Else = 69,
    /// `return`
    Return = 70,
}

impl TokenKind {
    /// Human-readable name for diagnostics.
    ///
    /// Fixed-spelling kinds render as their spelling; the rest use a
    /// descriptive noun.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal character",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        }
    }

    /// Returns `true` for reserved words (`fn`, `let`, `if`, ...).
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Returns `true` for arithmetic, prefix and comparison operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::Equal
                | TokenKind::NotEqual
        )
    }

    /// Returns `true` for separators and brackets.
    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A scanned token: its kind, the exact lexeme, and where it came from.
///
/// `text` is the raw byte slice of the input. `EndOfInput` carries an empty
/// slice and a point span at the input length.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    kind: TokenKind,
    text: &'a [u8],
    span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'a [u8], span: Span) -> Self {
        Token { kind, text, span }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact lexeme bytes.
    #[inline]
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// The lexeme as text, replacing bytes that are not valid UTF-8.
    pub fn text_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.text)
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Renders as `Kind("text")`, escaping non-printable bytes.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}(\"{}\")", self.kind, self.text.escape_ascii())
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} @ {}", self.span)
    }
}
