use rand::{thread_rng, Rng};

use super::{expression::Expression, roll::RollResult};
use crate::config::RollConfig;

/// Independent expressions, evaluated in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rolls {
    expressions: Vec<Expression>,
}

impl Rolls {
    pub fn new(expressions: Vec<Expression>) -> Self {
        Self { expressions }
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `values_with()`
    pub fn values(&self) -> Vec<i32> {
        self.values_with(&mut thread_rng())
    }

    pub fn values_with(&self, rng: &mut impl Rng) -> Vec<i32> {
        self.expressions
            .iter()
            .map(|expression| expression.result_with(&mut *rng).value)
            .collect()
    }

    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `results_with()`
    pub fn results(&self) -> Vec<RollResult> {
        self.results_with(&mut thread_rng())
    }

    pub fn results_with(&self, rng: &mut impl Rng) -> Vec<RollResult> {
        self.expressions
            .iter()
            .map(|expression| expression.result_with(&mut *rng))
            .collect()
    }

    /// Rolls with the seed of `config` when there is one.
    pub fn results_for(&self, config: &RollConfig) -> Vec<RollResult> {
        match config.seed {
            Some(seed) => self
                .expressions
                .iter()
                .map(|expression| expression.result_seeded(seed))
                .collect(),
            None => self.results(),
        }
    }
}

impl From<Expression> for Rolls {
    fn from(expression: Expression) -> Self {
        Self::new(vec![expression])
    }
}

impl FromIterator<Expression> for Rolls {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
