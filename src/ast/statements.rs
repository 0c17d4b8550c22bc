use super::expressions::{Expression, FunctionCall, Variable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Skip,
    Assign {
        target: Variable,
        value: Expression,
    },
    If {
        condition: Expression,
        then_branch: Box<Statement>,
        else_branch: Box<Statement>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    /// Runs `first`, then `second`.
    Chain {
        first: Box<Statement>,
        second: Box<Statement>,
    },
    Return(Expression),
    FunctionCall(FunctionCall),
}

impl Statement {
    pub fn assign(target: impl Into<String>, value: Expression) -> Self {
        Statement::Assign {
            target: Variable::new(target),
            value,
        }
    }

    pub fn if_else(condition: Expression, then_branch: Statement, else_branch: Statement) -> Self {
        Statement::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn while_loop(condition: Expression, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn chain(first: Statement, second: Statement) -> Self {
        Statement::Chain {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Sequences statements in order as right-nested `Chain` nodes.
    ///
    /// An empty list becomes `Skip` and a single statement is returned as is.
    pub fn chain_of(statements: Vec<Statement>) -> Self {
        statements
            .into_iter()
            .rev()
            .reduce(|rest, statement| Statement::chain(statement, rest))
            .unwrap_or(Statement::Skip)
    }
}
