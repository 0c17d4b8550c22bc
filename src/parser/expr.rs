use crate::{
    ast::expressions::{BinaryOperator, Expression, FunctionCall},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, binding_power, operator_tokens, BindingPower, ExprHandler, TERM_ALTERNATIVES},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parse_left_associative(parser, parse_and_expr, BindingPower::Or)
}

fn parse_and_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parse_left_associative(parser, parse_comparison_expr, BindingPower::And)
}

/// At most one comparison: `a < b < c` stops after `a < b`.
fn parse_comparison_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let left = parse_additive_expr(parser)?;

    let tail = parser.optional(|parser| {
        let operator = parse_operator(parser, BindingPower::Relational)?;
        Ok((operator, parse_additive_expr(parser)?))
    })?;

    Ok(match tail {
        Some((operator, right)) => Expression::binary(left, right, operator),
        None => left,
    })
}

fn parse_additive_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parse_left_associative(parser, parse_multiplicative_expr, BindingPower::Additive)
}

fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parse_left_associative(parser, parse_term, BindingPower::Multiplicative)
}

/// Parses `operand (operator operand)*` for the operators of one level and
/// folds the result to the left.
fn parse_left_associative(parser: &mut Parser, operand: ExprHandler, level: BindingPower) -> Result<Expression, Error> {
    let mut left = operand(parser)?;

    while let Some((operator, right)) = parser.optional(|parser| {
        let operator = parse_operator(parser, level)?;
        Ok((operator, operand(parser)?))
    })? {
        left = Expression::binary(left, right, operator);
    }

    Ok(left)
}

fn parse_operator(parser: &mut Parser, level: BindingPower) -> Result<BinaryOperator, Error> {
    match binary_operator(parser.current_token_kind()) {
        Some(operator) if binding_power(operator) == level => {
            parser.advance();
            Ok(operator)
        }
        _ => Err(parser.unexpected(operator_tokens(level))),
    }
}

pub fn parse_term(parser: &mut Parser) -> Result<Expression, Error> {
    parser.choice(&TERM_ALTERNATIVES)
}

pub fn parse_constant_expr(parser: &mut Parser) -> Result<Expression, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token().value.clone();

            match token.parse() {
                Ok(value) => {
                    parser.advance();
                    Ok(Expression::Const(value))
                }
                Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token }, parser.get_position())),
            }
        }
        TokenKind::CharLiteral => {
            // The lexer only produces `'c'`, so the character sits at index 1.
            let value = parser.advance().value.chars().nth(1).unwrap_or_default();
            Ok(Expression::Const(value as i32))
        }
        TokenKind::True => {
            parser.advance();
            Ok(Expression::Const(1))
        }
        TokenKind::False => {
            parser.advance();
            Ok(Expression::Const(0))
        }
        _ => Err(parser.unexpected(&[
            TokenKind::Number,
            TokenKind::CharLiteral,
            TokenKind::True,
            TokenKind::False,
        ])),
    }
}

/// `name ( [expr {, expr}] )`
pub fn parse_function_call(parser: &mut Parser) -> Result<FunctionCall, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;
    let arguments = parser.separated(parse_expr, TokenKind::Comma, true)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(FunctionCall::unresolved(name, arguments))
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Expression::FunctionCall(parse_function_call(parser)?))
}

pub fn parse_not_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.expect(TokenKind::Not)?;
    let operand = parse_term(parser)?;

    Ok(Expression::not(operand))
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;

    Ok(Expression::variable(name))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let raw = parser.expect(TokenKind::StringLiteral)?.value;
    let value = raw
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(&raw);

    Ok(Expression::StringLiteral(value.to_string()))
}
