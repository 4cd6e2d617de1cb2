//! Owned source buffer with encoding diagnostics.
//!
//! The scanner treats input as a plain byte sequence and never validates
//! encoding. The buffer still records a few byte patterns that almost always
//! mean the caller handed us the wrong thing:
//! - UTF-8 BOM at the start
//! - UTF-16 BOMs at the start (wrong encoding)
//! - Interior null bytes
//!
//! Issues are recorded as [`EncodingIssue`] values. They never change how the
//! input is tokenized; [`collect_errors`](crate::lex_error::collect_errors)
//! turns them into reportable errors.

use crate::{Cursor, Scanner, Span};

/// Owned copy of the input bytes plus the encoding issues found in them.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

impl EncodingIssue {
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.pos + self.len)
    }
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start.
    Utf16BeBom,
    /// Null byte inside the source content.
    InteriorNull,
}

impl SourceBuffer {
    /// Copy `source` into a new buffer and scan it for encoding issues.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let buf = source.as_ref().to_vec();

        let mut encoding_issues = Vec::new();
        detect_bom(&buf, &mut encoding_issues);
        detect_interior_nulls(&buf, &mut encoding_issues);

        Self {
            buf,
            encoding_issues,
        }
    }

    /// Returns the source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf)
    }

    /// Create a [`Scanner`] over the whole buffer.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.buf)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Encoding issues detected during construction, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect byte order marks at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let (kind, len) = if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        (EncodingIssueKind::Utf8Bom, 3)
    } else if source.starts_with(&[0xFF, 0xFE]) {
        (EncodingIssueKind::Utf16LeBom, 2)
    } else if source.starts_with(&[0xFE, 0xFF]) {
        (EncodingIssueKind::Utf16BeBom, 2)
    } else {
        return;
    };
    issues.push(EncodingIssue { kind, pos: 0, len });
}

/// Detect null bytes within the source content.
///
/// Positions past `u32::MAX` are not recorded.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for absolute in memchr::memchr_iter(0, source) {
        let Ok(pos) = u32::try_from(absolute) else {
            break;
        };
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::InteriorNull,
            pos,
            len: 1,
        });
    }
}
