//! Roll dice written in a small notation, keeping every step of the roll.
//!
//! Expressions are separated by `;`, dice are written as `[times]d<faces>[modifier]`
//! where the modifier is one of `H` (keep highest), `L` (keep lowest),
//! `h` (drop highest), `l` (drop lowest) or `e` (exploding), and dice and
//! numbers can be added or subtracted.
//!
//! ```rust
//! # use critical_dice::{generate, parse, roll_with, Dice, Expression, Modifier};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), critical_dice::ParseError> {
//! // Roll 3 d6 dropping the highest, then add 2. Roll a d20 on its own.
//! let mut rng = StdRng::seed_from_u64(1);
//! let results = roll_with("3d6h + 2; d20", &mut rng)?;
//! println!("{} = {}", results[0], results[0].value); // [5, 6, 5] + 2 = 12
//!
//! // Parse once, roll many times
//! let rolls = generate(&parse("2d8e - 1")?);
//! let first = rolls.values();
//! let second = rolls.values();
//! # assert_eq!(first.len(), second.len());
//!
//! // Create expressions directly without parsing
//! let dice = Expression::from(Dice::new(4, 6, Modifier::KeepHigh));
//! let rolled = dice.result_seeded(1);
//! println!("{rolled} = {}", rolled.value); // [5, 6, 5, 5] = 6
//!
//! # Ok(())
//! # }
//! ```

mod config;
mod evaluate;
mod generate;
mod parse;

pub use config::{ConfigError, RollConfig, SEED_VAR};
pub use evaluate::{dice_roll::Dice, expression::Expression, roll::RollResult, rolls::Rolls};
pub use generate::generate;
pub use parse::{
    parse, CharSource, DiceRollExpr, ExpressionList, ExpressionNode, Modifier, NumberLiteral,
    OperationExpr, Operator, ParseError, Parser, Program, SyntaxError, Token, TokenKind,
    TokenStream, Tokenizer, UnknownTokenError,
};

/// Parses the notation returning the expressions ready to be rolled.
pub fn parse_rolls(notation: &str) -> Result<Rolls, ParseError> {
    let program = parse(notation)?;
    Ok(generate(&program))
}

/// Parses the notation returning the result of rolling every expression.
pub fn roll(notation: &str) -> Result<Vec<RollResult>, ParseError> {
    Ok(parse_rolls(notation)?.results())
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(notation: &str, rng: &mut impl rand::Rng) -> Result<Vec<RollResult>, ParseError> {
    Ok(parse_rolls(notation)?.results_with(rng))
}
