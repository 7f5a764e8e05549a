use crate::{
    evaluate::{dice_roll::Dice, expression::Expression, rolls::Rolls},
    parse::{DiceRollExpr, ExpressionNode, Modifier, OperationExpr, Operator, Program, Token},
};

/// Turns a parsed program into expressions that can be rolled.
///
/// # Panics
///
/// On trees the parser never produces, like an operation on the left side of
/// another operation or tokens that do not hold what their kind promises.
pub fn generate(program: &Program) -> Rolls {
    program.expressions().iter().map(map_expression).collect()
}

fn map_expression(node: &ExpressionNode) -> Expression {
    match node {
        ExpressionNode::Number(literal) => Expression::Constant(literal.value),
        ExpressionNode::DiceRoll(dice) => Expression::Dice(map_dice(dice)),
        ExpressionNode::Operation(operation) => map_operation(operation),
    }
}

fn map_operation(operation: &OperationExpr) -> Expression {
    let lhs = match operation.left.as_ref() {
        ExpressionNode::Operation(_) => {
            unreachable!("operations nest on the right, found one on the left")
        }
        terminal => map_expression(terminal),
    };
    let rhs = map_expression(&operation.right);

    Expression::operation(operator_of(&operation.operator), lhs, rhs)
}

fn map_dice(dice: &DiceRollExpr) -> Dice {
    let number = match &dice.times {
        Some(token) => number_of(token),
        None => 1,
    };
    let modifier = match &dice.modifier {
        Some(token) => modifier_of(token),
        None => Modifier::None,
    };

    Dice::new(number, number_of(&dice.faces), modifier)
}

fn number_of<T: std::str::FromStr>(token: &Token) -> T {
    match token.lexeme().parse() {
        Ok(value) => value,
        Err(_) => panic!("{token} does not hold a valid number"),
    }
}

fn single_char(token: &Token) -> char {
    let mut chars = token.lexeme().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => panic!("{token} should hold a single character"),
    }
}

fn modifier_of(token: &Token) -> Modifier {
    Modifier::try_from(single_char(token))
        .unwrap_or_else(|c| panic!("'{c}' is not a modifier"))
}

fn operator_of(token: &Token) -> Operator {
    Operator::try_from(single_char(token))
        .unwrap_or_else(|c| panic!("'{c}' is not an operator"))
}
