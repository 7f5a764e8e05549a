use super::expression::Expression;

/// The value an expression evaluated to, along with how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    pub expression: Expression,
    pub value: i32,
    /// Results that contributed to `value`: one per die for dice, the two
    /// operands for operations.
    pub steps: Vec<RollResult>,
}

impl RollResult {
    pub fn new(expression: Expression, value: i32, steps: Vec<RollResult>) -> Self {
        Self {
            expression,
            value,
            steps,
        }
    }

    /// Every single die rolled to get this result, in rolling order.
    pub fn dice_rolls(&self) -> Vec<i32> {
        match self.expression {
            Expression::ConstantDie { value, .. } => vec![value],
            _ => self.steps.iter().flat_map(RollResult::dice_rolls).collect(),
        }
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.expression, self.steps.as_slice()) {
            (Expression::Dice(_), steps) => {
                let rolls: Vec<_> = steps.iter().map(|step| step.value.to_string()).collect();
                write!(f, "[{}]", rolls.join(", "))
            }
            (Expression::Operation(op, _, _), [lhs, rhs]) => write!(f, "{lhs} {op} {rhs}"),
            _ => write!(f, "{}", self.value),
        }
    }
}
