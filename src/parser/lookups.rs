use crate::{
    ast::{
        expressions::{BinaryOperator, Expression},
        statements::Statement,
    },
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Rule, program::*, stmt::*};

/// Precedence levels, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Or,
    And,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler = Rule<Statement>;
pub type ExprHandler = Rule<Expression>;
pub type ItemHandler = Rule<TopLevelItem>;

// Alternatives are tried in order; keep literals and calls ahead of bare variables.
pub const TERM_ALTERNATIVES: [ExprHandler; 6] = [
    parse_constant_expr,
    parse_call_expr,
    parse_not_expr,
    parse_symbol_expr,
    parse_grouping_expr,
    parse_string_expr,
];

pub const STMT_ALTERNATIVES: [StmtHandler; 8] = [
    parse_skip_stmt,
    parse_call_stmt,
    parse_assignment_stmt,
    parse_if_stmt,
    parse_while_stmt,
    parse_for_stmt,
    parse_repeat_stmt,
    parse_return_stmt,
];

pub const ITEM_ALTERNATIVES: [ItemHandler; 2] = [parse_fn_decl_item, parse_stmt_item];

pub fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Or => Some(BinaryOperator::Or),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Less => Some(BinaryOperator::Lt),
        TokenKind::Greater => Some(BinaryOperator::Gt),
        TokenKind::Equals => Some(BinaryOperator::Eq),
        TokenKind::NotEquals => Some(BinaryOperator::Neq),
        TokenKind::LessEquals => Some(BinaryOperator::Leq),
        TokenKind::GreaterEquals => Some(BinaryOperator::Geq),
        TokenKind::Plus => Some(BinaryOperator::Plus),
        TokenKind::Dash => Some(BinaryOperator::Minus),
        TokenKind::Star => Some(BinaryOperator::Times),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Rem),
        _ => None,
    }
}

pub fn binding_power(operator: BinaryOperator) -> BindingPower {
    match operator {
        BinaryOperator::Or => BindingPower::Or,
        BinaryOperator::And => BindingPower::And,
        BinaryOperator::Lt
        | BinaryOperator::Gt
        | BinaryOperator::Eq
        | BinaryOperator::Neq
        | BinaryOperator::Leq
        | BinaryOperator::Geq => BindingPower::Relational,
        BinaryOperator::Plus | BinaryOperator::Minus => BindingPower::Additive,
        BinaryOperator::Times | BinaryOperator::Div | BinaryOperator::Rem => {
            BindingPower::Multiplicative
        }
    }
}

/// Operator tokens accepted at a precedence level, for error reporting.
pub fn operator_tokens(level: BindingPower) -> &'static [TokenKind] {
    match level {
        BindingPower::Or => &[TokenKind::Or],
        BindingPower::And => &[TokenKind::And],
        BindingPower::Relational => &[
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
        ],
        BindingPower::Additive => &[TokenKind::Plus, TokenKind::Dash],
        BindingPower::Multiplicative => &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
    }
}
