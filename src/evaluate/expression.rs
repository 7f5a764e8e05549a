use std::rc::Rc;

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

use super::{dice_roll::Dice, roll::RollResult};
use crate::parse::Operator;

/// Something that can be rolled into a [`RollResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Constant(i32),
    Dice(Dice),
    /// Operands are shared, cloning an operation does not copy the tree.
    Operation(Operator, Rc<Expression>, Rc<Expression>),
    /// A single die of a [`Dice`] that was already rolled.
    ConstantDie { faces: i32, value: i32 },
}

impl Expression {
    pub fn operation(operator: Operator, lhs: Expression, rhs: Expression) -> Self {
        Expression::Operation(operator, Rc::new(lhs), Rc::new(rhs))
    }

    pub fn die(faces: i32, value: i32) -> Self {
        Expression::ConstantDie { faces, value }
    }

    /// Evaluates the expression rolling every dice again.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `result_with()`
    pub fn result(&self) -> RollResult {
        self.result_with(&mut thread_rng())
    }

    pub fn result_with(&self, rng: &mut impl Rng) -> RollResult {
        self.evaluate(&mut |dice| dice.result_with(&mut *rng))
    }

    /// Every dice is rolled with its own rng seeded with `seed`, so the same
    /// dice always rolls the same way.
    pub fn result_seeded(&self, seed: u64) -> RollResult {
        self.evaluate(&mut |dice| dice.result_with(&mut StdRng::seed_from_u64(seed)))
    }

    fn evaluate(&self, roll_dice: &mut dyn FnMut(&Dice) -> RollResult) -> RollResult {
        match self {
            Expression::Constant(value) | Expression::ConstantDie { value, .. } => {
                RollResult::new(self.clone(), *value, Vec::new())
            }
            Expression::Dice(dice) => roll_dice(dice),
            Expression::Operation(operator, lhs, rhs) => {
                let lhs = lhs.evaluate(&mut *roll_dice);
                let rhs = rhs.evaluate(&mut *roll_dice);
                let value = operator.apply(lhs.value, rhs.value);
                RollResult::new(self.clone(), value, vec![lhs, rhs])
            }
        }
    }
}

impl From<Dice> for Expression {
    fn from(dice: Dice) -> Self {
        Expression::Dice(dice)
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        Expression::Constant(value)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{value}"),
            Expression::Dice(dice) => write!(f, "{dice}"),
            Expression::Operation(op, lhs, rhs) => write!(f, "{lhs} {op} {rhs}"),
            Expression::ConstantDie { faces, .. } => write!(f, "d{faces}"),
        }
    }
}
