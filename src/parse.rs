mod ast;
mod error;
mod source;
mod symbol;
mod token;
mod tokenizer;

use std::ops::RangeInclusive;

#[cfg(feature = "logging")]
use log::debug;

pub use ast::{DiceRollExpr, ExpressionList, ExpressionNode, NumberLiteral, OperationExpr, Program};
pub use error::{ParseError, Result, SyntaxError, UnknownTokenError};
pub use source::CharSource;
pub use symbol::{Modifier, Operator};
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenStream, Tokenizer};

/// How far past the current token an operator is searched for before deciding
/// that an expression is a single terminal.
const OPERATOR_LOOKAHEAD: RangeInclusive<usize> = 1..=4;

/// Recursive descent parser for the notation.
///
/// ```text
/// program         = SOF expression_list EOF
/// expression_list = [expression { ";" expression }]
/// expression      = operation | terminal
/// operation       = terminal operator expression
/// terminal        = dice_roll | number
/// dice_roll       = [number] "d" number [modifier]
/// ```
#[derive(Debug)]
pub struct Parser<T> {
    tokens: T,
    /// Last consumed token, number errors are reported right after it.
    last: Option<Token>,
}

impl Parser<Tokenizer> {
    pub fn for_str(input: &str) -> Self {
        Self::new(Tokenizer::for_str(input))
    }
}

impl<T: TokenStream> Parser<T> {
    pub fn new(tokens: T) -> Self {
        Self { tokens, last: None }
    }

    pub fn parse(&mut self) -> Result<Program> {
        self.expect_start()?;
        let list = self.expression_list()?;
        self.expect_end()?;

        #[cfg(feature = "logging")]
        debug!("parsed {} expressions", list.len());

        Ok(Program::new(list))
    }

    fn advance(&mut self) -> Result<Token> {
        let token = self.tokens.next_token()?;
        self.last = Some(token.clone());
        Ok(token)
    }

    fn next_is(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.tokens.peek()?.is(kind))
    }

    fn expect_start(&mut self) -> Result<()> {
        let token = self.advance()?;
        if !token.is(TokenKind::Sof) {
            let reason = format!("expected to find the SOF, but found {}", token.kind);
            return Err(SyntaxError::at(token, reason).into());
        }
        Ok(())
    }

    fn expect_end(&mut self) -> Result<()> {
        let token = self.advance()?;
        if !token.is(TokenKind::Eof) {
            let reason = format!("expected to find the EOF, but found {}", token.kind);
            return Err(SyntaxError::at(token, reason).into());
        }
        Ok(())
    }

    fn expression_list(&mut self) -> Result<ExpressionList> {
        let mut items = Vec::new();
        if self.next_is(TokenKind::Eof)? {
            return Ok(ExpressionList::new(items));
        }

        items.push(self.expression()?);
        while self.next_is(TokenKind::ExpressionSeparator)? {
            self.advance()?;
            items.push(self.expression()?);

            let next = self.tokens.peek()?;
            if !matches!(next.kind, TokenKind::ExpressionSeparator | TokenKind::Eof) {
                let reason = format!(
                    "expected to find an operator, an expression separator or the EOF, but found {}",
                    next.kind
                );
                return Err(SyntaxError::at(next, reason).into());
            }
        }

        Ok(ExpressionList::new(items))
    }

    fn expression(&mut self) -> Result<ExpressionNode> {
        if self.operator_ahead()? {
            Ok(self.operation()?.into())
        } else {
            self.terminal()
        }
    }

    /// Looks for an operator belonging to the current expression, the search
    /// stops at the next separator.
    fn operator_ahead(&mut self) -> Result<bool> {
        for n in OPERATOR_LOOKAHEAD {
            match self.tokens.peek_nth(n)?.kind {
                TokenKind::Operator => return Ok(true),
                TokenKind::ExpressionSeparator | TokenKind::Eof => return Ok(false),
                _ => {}
            }
        }
        Ok(false)
    }

    fn operation(&mut self) -> Result<OperationExpr> {
        let left = self.terminal()?;

        let operator = self.advance()?;
        if !operator.is(TokenKind::Operator) {
            let reason = format!(
                "operator (either '+' or '-') expected, but found {}",
                operator.kind
            );
            return Err(SyntaxError::at(operator, reason).into());
        }

        let right = self.expression()?;
        Ok(OperationExpr::new(left, operator, right))
    }

    fn terminal(&mut self) -> Result<ExpressionNode> {
        let dice_ahead = self.tokens.peek_nth(0)?.is(TokenKind::DSymbol)
            || self.tokens.peek_nth(1)?.is(TokenKind::DSymbol);

        if dice_ahead {
            Ok(self.dice_roll()?.into())
        } else {
            let (token, value) = self.number()?;
            Ok(NumberLiteral::new(token, value).into())
        }
    }

    fn dice_roll(&mut self) -> Result<DiceRollExpr> {
        let times = if self.next_is(TokenKind::Number)? {
            Some(self.times()?)
        } else {
            None
        };

        let d_symbol = self.advance()?;
        if !d_symbol.is(TokenKind::DSymbol) {
            let reason = format!("'d' letter expected, but found {}", d_symbol.kind);
            return Err(SyntaxError::at(d_symbol, reason).into());
        }

        let (faces, faces_value) = self.number()?;

        let modifier = if self.next_is(TokenKind::Modifier)? {
            Some(self.modifier(faces_value)?)
        } else {
            None
        };

        Ok(DiceRollExpr::new(times, d_symbol, faces, modifier))
    }

    fn modifier(&mut self, faces: i32) -> Result<Token> {
        let token = self.advance()?;
        let modifier = token
            .lexeme()
            .chars()
            .next()
            .and_then(|c| Modifier::try_from(c).ok());

        match modifier {
            None => {
                let reason = format!(
                    "modifier (either one of 'H', 'h', 'L', 'l' or 'e') expected, but found {}",
                    token.kind
                );
                Err(SyntaxError::at(token, reason).into())
            }
            Some(Modifier::Explode) if (-1..=1).contains(&faces) => {
                let reason = format!("exploding dice need more than one face, but found {faces}");
                Err(SyntaxError::at(token, reason).into())
            }
            Some(_) => Ok(token),
        }
    }

    /// The number of dice thrown, between 1 and 255.
    fn times(&mut self) -> Result<Token> {
        let (token, value) = self.number()?;
        if !(1..=i32::from(u8::MAX)).contains(&value) {
            let reason = format!("number between [1, 255] expected, but found {value}");
            return Err(SyntaxError::at(token, reason).into());
        }
        Ok(token)
    }

    fn number(&mut self) -> Result<(Token, i32)> {
        let position = self.last.as_ref().map_or(-1, |token| token.end_pos);
        let token = self.advance()?;

        if !token.is(TokenKind::Number) {
            let found = token.kind.to_string();
            return Err(number_expected(token, found, position));
        }

        match token.lexeme().parse::<i32>() {
            Ok(value) => Ok((token, value)),
            Err(_) => {
                let found = token.lexeme().to_string();
                Err(number_expected(token, found, position))
            }
        }
    }
}

fn number_expected(token: Token, found: String, position: isize) -> ParseError {
    let reason = format!(
        "number in range [{}, {}] expected, but found {found}",
        i32::MIN,
        i32::MAX
    );
    SyntaxError::at_position(token, reason, position).into()
}

/// Parses the notation into its syntax tree.
pub fn parse(input: &str) -> Result<Program> {
    Parser::for_str(input).parse()
}
