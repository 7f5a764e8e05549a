use super::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub token: Token,
    pub value: i32,
}

/// `[times] d faces [modifier]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRollExpr {
    pub times: Option<Token>,
    pub d_symbol: Token,
    pub faces: Token,
    pub modifier: Option<Token>,
}

/// `left operator right`, where only `right` can be another operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationExpr {
    pub left: Box<ExpressionNode>,
    pub operator: Token,
    pub right: Box<ExpressionNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionNode {
    Number(NumberLiteral),
    DiceRoll(DiceRollExpr),
    Operation(OperationExpr),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionList {
    pub items: Vec<ExpressionNode>,
}

/// Root of every parsed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub list: ExpressionList,
}

impl NumberLiteral {
    pub fn new(token: Token, value: i32) -> Self {
        Self { token, value }
    }
}

impl DiceRollExpr {
    pub fn new(
        times: Option<Token>,
        d_symbol: Token,
        faces: Token,
        modifier: Option<Token>,
    ) -> Self {
        Self {
            times,
            d_symbol,
            faces,
            modifier,
        }
    }
}

impl OperationExpr {
    pub fn new(left: ExpressionNode, operator: Token, right: ExpressionNode) -> Self {
        Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

impl From<NumberLiteral> for ExpressionNode {
    fn from(node: NumberLiteral) -> Self {
        ExpressionNode::Number(node)
    }
}

impl From<DiceRollExpr> for ExpressionNode {
    fn from(node: DiceRollExpr) -> Self {
        ExpressionNode::DiceRoll(node)
    }
}

impl From<OperationExpr> for ExpressionNode {
    fn from(node: OperationExpr) -> Self {
        ExpressionNode::Operation(node)
    }
}

impl ExpressionList {
    pub fn new(items: Vec<ExpressionNode>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Program {
    pub fn new(list: ExpressionList) -> Self {
        Self { list }
    }

    pub fn with_expressions(nodes: impl IntoIterator<Item = ExpressionNode>) -> Self {
        Self::new(ExpressionList::new(nodes.into_iter().collect()))
    }

    pub fn expressions(&self) -> &[ExpressionNode] {
        &self.list.items
    }
}
