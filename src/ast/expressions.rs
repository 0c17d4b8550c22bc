use std::fmt::Display;

/// A named variable, used both as an expression and as an assignment target
/// or function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Or,
    And,
    Lt,
    Gt,
    Eq,
    Neq,
    Leq,
    Geq,
    Plus,
    Minus,
    Times,
    Div,
    Rem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
}

/// Placeholder call target: only the name and the number of arguments seen
/// at the call site are known until calls are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnresolvedFunction {
    pub name: String,
    pub arity: usize,
}

/// Non-owning reference to a declaration, by its index in `Program::functions`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionRef {
    pub name: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallTarget {
    Unresolved(UnresolvedFunction),
    Resolved(FunctionRef),
}

impl CallTarget {
    pub fn name(&self) -> &str {
        match self {
            CallTarget::Unresolved(function) => &function.name,
            CallTarget::Resolved(function) => &function.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub target: CallTarget,
    pub arguments: Vec<Expression>,
}

impl FunctionCall {
    /// Builds a call whose target records the observed argument count.
    pub fn unresolved(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        FunctionCall {
            target: CallTarget::Unresolved(UnresolvedFunction {
                name: name.into(),
                arity: arguments.len(),
            }),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Const(i32),
    Variable(Variable),
    StringLiteral(String),
    UnaryOperation {
        operand: Box<Expression>,
        operator: UnaryOperator,
    },
    BinaryOperation {
        left: Box<Expression>,
        right: Box<Expression>,
        operator: BinaryOperator,
    },
    FunctionCall(FunctionCall),
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(Variable::new(name))
    }

    pub fn not(operand: Expression) -> Self {
        Expression::UnaryOperation {
            operand: Box::new(operand),
            operator: UnaryOperator::Not,
        }
    }

    pub fn binary(left: Expression, right: Expression, operator: BinaryOperator) -> Self {
        Expression::BinaryOperation {
            left: Box::new(left),
            right: Box::new(right),
            operator,
        }
    }
}
