#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// Synthetic start of input.
    Sof,
    /// Integer with an optional leading `-`.
    Number,
    /// `d` or `D`
    DSymbol,
    /// One of `H`, `h`, `L`, `l`, `e`
    Modifier,
    /// `+` or `-`
    Operator,
    /// `;`
    ExpressionSeparator,
    /// Synthetic end of input.
    Eof,
}

/// A unit of parseable input.
///
/// Trailing spaces are part of the content, so `end_pos` points at the last
/// space swallowed by the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub start_pos: isize,
    pub end_pos: isize,
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>, start_pos: isize, end_pos: isize) -> Self {
        Self {
            start_pos,
            end_pos,
            content: content.into(),
            kind,
        }
    }

    /// An empty start of input token.
    pub fn sof() -> Self {
        Self::sof_with("", -1)
    }

    /// A start of input token holding the leading whitespace of the input.
    pub fn sof_with(content: impl Into<String>, end_pos: isize) -> Self {
        Self::new(TokenKind::Sof, content, -1, end_pos)
    }

    pub fn eof(pos: isize) -> Self {
        Self::new(TokenKind::Eof, "", pos, pos)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The content without the trailing spaces.
    pub fn lexeme(&self) -> &str {
        self.content.trim_end_matches(' ')
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            TokenKind::Sof => "SOF",
            TokenKind::Number => "Number",
            TokenKind::DSymbol => "DSymbol",
            TokenKind::Modifier => "Modifier",
            TokenKind::Operator => "Operator",
            TokenKind::ExpressionSeparator => "ExpressionSeparator",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{str}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({:?}) [{}, {}]",
            self.kind, self.content, self.start_pos, self.end_pos
        )
    }
}
