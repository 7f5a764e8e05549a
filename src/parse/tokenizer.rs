use std::collections::VecDeque;

#[cfg(feature = "logging")]
use log::trace;

use super::{
    error::UnknownTokenError,
    source::CharSource,
    symbol::{Modifier, Operator},
    token::{Token, TokenKind},
};

/// A stream of tokens that can be looked into before being consumed.
///
/// Once the end of input is reached every call keeps returning an EOF token.
pub trait TokenStream {
    /// The next token, without consuming it.
    fn peek(&mut self) -> Result<Token, UnknownTokenError> {
        self.peek_nth(0)
    }

    /// The token `n` positions ahead, without consuming anything.
    fn peek_nth(&mut self, n: usize) -> Result<Token, UnknownTokenError>;

    fn next_token(&mut self) -> Result<Token, UnknownTokenError>;

    /// Discards `n` tokens, then consumes and returns the following one.
    fn next_nth(&mut self, n: usize) -> Result<Token, UnknownTokenError> {
        for _ in 0..n {
            self.next_token()?;
        }
        self.next_token()
    }
}

/// Turns characters into [`Token`]s, appending trailing spaces to each one.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source: CharSource,
    buffer: VecDeque<Token>,
    previous: Option<TokenKind>,
}

impl Tokenizer {
    pub fn new(source: CharSource) -> Self {
        Self {
            source,
            buffer: VecDeque::with_capacity(8),
            previous: None,
        }
    }

    pub fn for_str(input: &str) -> Self {
        Self::new(CharSource::new(input))
    }

    /// Lexes tokens into the buffer until it holds `len` of them or ends with EOF.
    fn fill(&mut self, len: usize) -> Result<(), UnknownTokenError> {
        while self.buffer.len() < len {
            if self.buffer.back().is_some_and(|t| t.is(TokenKind::Eof)) {
                break;
            }
            let token = self.lex()?;

            #[cfg(feature = "logging")]
            trace!("buffered token {token}");

            self.buffer.push_back(token);
        }
        Ok(())
    }

    fn lex(&mut self) -> Result<Token, UnknownTokenError> {
        if self.source.is_sof() {
            return Ok(self.lex_start());
        }

        let start_pos = self.source.next_pos();
        let Some(next) = self.source.peek() else {
            return Ok(Token::eof(start_pos));
        };

        let kind = match next {
            c if c.is_ascii_digit() => TokenKind::Number,
            '-' if self.starts_operand()
                && self.source.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) =>
            {
                TokenKind::Number
            }
            c if Operator::try_from(c).is_ok() => TokenKind::Operator,
            'd' | 'D' => TokenKind::DSymbol,
            c if Modifier::try_from(c).is_ok() => TokenKind::Modifier,
            ';' => TokenKind::ExpressionSeparator,
            c => return Err(UnknownTokenError::new(c, start_pos)),
        };

        let mut content = String::new();
        content.extend(self.source.consume());
        if kind == TokenKind::Number {
            self.take_while(&mut content, |c| c.is_ascii_digit());
        }
        self.take_while(&mut content, |c| c == ' ');

        self.previous = Some(kind);
        Ok(Token::new(
            kind,
            content,
            start_pos,
            self.source.next_pos() - 1,
        ))
    }

    /// A `-` right after a number or a modifier is a subtraction, anywhere else
    /// it can only be the sign of the next number.
    fn starts_operand(&self) -> bool {
        !matches!(
            self.previous,
            Some(TokenKind::Number) | Some(TokenKind::Modifier)
        )
    }

    fn lex_start(&mut self) -> Token {
        self.source.consume();

        let mut content = String::new();
        self.take_while(&mut content, |c| c == ' ');

        let end_pos = if self.source.next_pos() > 0 {
            self.source.next_pos() - 1
        } else {
            -1
        };
        Token::sof_with(content, end_pos)
    }

    fn take_while(&mut self, content: &mut String, condition: impl Fn(char) -> bool) {
        while let Some(c) = self.source.peek().filter(|&c| condition(c)) {
            content.push(c);
            self.source.consume();
        }
    }
}

impl TokenStream for Tokenizer {
    fn peek_nth(&mut self, n: usize) -> Result<Token, UnknownTokenError> {
        self.fill(n.saturating_add(1))?;

        // The buffer only falls short when it ends with EOF.
        let token = self.buffer.get(n).or_else(|| self.buffer.back());
        match token {
            Some(token) => Ok(token.clone()),
            None => Ok(Token::eof(self.source.next_pos())),
        }
    }

    fn next_token(&mut self) -> Result<Token, UnknownTokenError> {
        match self.buffer.pop_front() {
            Some(token) => Ok(token),
            None => self.lex(),
        }
    }
}
