//! Token types

use crate::util::span::{Position, Span};
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Shape of a token, derived from its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Bare word, number or symbol
    Atom,
    /// Quoted string, both quotes included
    String,
    /// `[...]` array literal, kept whole
    Array,
    /// `(...)` sub-expression, kept whole
    Expression,
    /// `|...|` closure header
    Closure,
}

/// One lexical unit: its literal text and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn kind(&self) -> TokenKind {
        match self.text.as_bytes().first() {
            Some(b'"') => TokenKind::String,
            Some(b'[') => TokenKind::Array,
            Some(b'(') => TokenKind::Expression,
            Some(b'|') => TokenKind::Closure,
            _ => TokenKind::Atom,
        }
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Token {
    fn eq(
        &self,
        other: &str,
    ) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(
        &self,
        other: &&str,
    ) -> bool {
        self.text == *other
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Paired-delimiter constructs the scanner tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Quote,
    Closure,
    Array,
    Expression,
}

impl fmt::Display for Construct {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Construct::Quote => write!(f, "quote"),
            Construct::Closure => write!(f, "closure"),
            Construct::Array => write!(f, "array"),
            Construct::Expression => write!(f, "expression"),
        }
    }
}

/// Scanner error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("Malformed expression at {position}: {message}")]
    MalformedExpression { position: Position, message: String },
    #[error("{construct} not separated by a space at {position}")]
    SeparatorExpected {
        position: Position,
        construct: Construct,
    },
    #[error("Unexpected character '{ch}' at {position}: {message}")]
    UnexpectedCharacter {
        position: Position,
        ch: char,
        message: String,
    },
    #[error("{construct} not closed correctly (opened at {position})")]
    UnterminatedConstruct {
        position: Position,
        construct: Construct,
    },
    #[error("Expected end of input, found `)` at position {} ({})", .position.offset, .position)]
    PrematureEnd { position: Position },
}

/// Fieldless mirror of [`ScanError`] for matching on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    MalformedExpression,
    SeparatorExpected,
    UnexpectedCharacter,
    UnterminatedConstruct,
    PrematureEnd,
}

impl ScanError {
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            ScanError::MalformedExpression { .. } => ScanErrorKind::MalformedExpression,
            ScanError::SeparatorExpected { .. } => ScanErrorKind::SeparatorExpected,
            ScanError::UnexpectedCharacter { .. } => ScanErrorKind::UnexpectedCharacter,
            ScanError::UnterminatedConstruct { .. } => ScanErrorKind::UnterminatedConstruct,
            ScanError::PrematureEnd { .. } => ScanErrorKind::PrematureEnd,
        }
    }

    /// Where the offending character (or the unclosed opener) sits
    pub fn position(&self) -> Position {
        match self {
            ScanError::MalformedExpression { position, .. }
            | ScanError::SeparatorExpected { position, .. }
            | ScanError::UnexpectedCharacter { position, .. }
            | ScanError::UnterminatedConstruct { position, .. }
            | ScanError::PrematureEnd { position } => *position,
        }
    }
}
