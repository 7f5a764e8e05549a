use super::token::Token;

/// An input character that does not start any token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown token '{content}' at position {position}.")]
pub struct UnknownTokenError {
    pub content: String,
    pub position: isize,
}

impl UnknownTokenError {
    pub fn new(c: char, position: isize) -> Self {
        Self {
            content: c.to_string(),
            position,
        }
    }
}

/// An expected token category was not found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Syntax error at position {position}: {reason}.")]
pub struct SyntaxError {
    /// The token found instead of the expected one.
    pub token: Token,
    pub reason: String,
    pub position: isize,
}

impl SyntaxError {
    /// Error reported at the start of the offending token.
    pub fn at(token: Token, reason: impl Into<String>) -> Self {
        let position = token.start_pos;
        Self::at_position(token, reason, position)
    }

    pub fn at_position(token: Token, reason: impl Into<String>, position: isize) -> Self {
        Self {
            token,
            reason: reason.into(),
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    UnknownToken(#[from] UnknownTokenError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Column to mark when showing the error under the input.
    pub fn position(&self) -> isize {
        match self {
            ParseError::UnknownToken(err) => err.position,
            ParseError::Syntax(err) => err.position,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
