use crate::{
    ast::{expressions::Expression, statements::Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_function_call},
    lookups::STMT_ALTERNATIVES,
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.choice(&STMT_ALTERNATIVES)
}

/// Parses `stmt {; stmt} [;]` into a chain of statements in source order.
///
/// At least one statement is required.
pub fn parse_block(parser: &mut Parser) -> Result<Statement, Error> {
    let statements = parser.separated(parse_stmt, TokenKind::Semicolon, false)?;
    parser.eat(TokenKind::Semicolon);

    Ok(Statement::chain_of(statements))
}

pub fn parse_skip_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::Skip)?;

    Ok(Statement::Skip)
}

pub fn parse_call_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    Ok(Statement::FunctionCall(parse_function_call(parser)?))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let target = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    Ok(Statement::assign(target, value))
}

/// `if C then B {elif C then B} [else B] fi`
///
/// Each `elif` becomes an `If` nested in the else branch of the previous one;
/// the innermost else branch is the `else` body, or `Skip` without one.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::If)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then)?;
    let then_branch = parse_block(parser)?;

    let mut elifs = vec![];
    while let Some(elif) = parser.optional(parse_elif_clause)? {
        elifs.push(elif);
    }

    let else_branch = parser
        .optional(|parser| {
            parser.expect(TokenKind::Else)?;
            parse_block(parser)
        })?
        .unwrap_or(Statement::Skip);

    parser.expect(TokenKind::Fi)?;

    let else_branch = elifs
        .into_iter()
        .rev()
        .fold(else_branch, |otherwise, (condition, body)| {
            Statement::if_else(condition, body, otherwise)
        });

    Ok(Statement::if_else(condition, then_branch, else_branch))
}

fn parse_elif_clause(parser: &mut Parser) -> Result<(Expression, Statement), Error> {
    parser.expect(TokenKind::Elif)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then)?;
    let body = parse_block(parser)?;

    Ok((condition, body))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::While)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Do)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::Od)?;

    Ok(Statement::while_loop(condition, body))
}

/// `for Init, C, Step do B od` becomes `Init; while C do B; Step od`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::For)?;
    let init = parse_stmt(parser)?;
    parser.expect(TokenKind::Comma)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Comma)?;
    let step = parse_stmt(parser)?;
    parser.expect(TokenKind::Do)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::Od)?;

    Ok(Statement::chain(
        init,
        Statement::while_loop(condition, Statement::chain(body, step)),
    ))
}

/// `repeat B until C` becomes `B; while !C do B od`.
pub fn parse_repeat_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::Repeat)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::Until)?;
    let condition = parse_expr(parser)?;

    Ok(Statement::chain(
        body.clone(),
        Statement::while_loop(Expression::not(condition), body),
    ))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::Return)?;
    let value = parse_expr(parser)?;

    Ok(Statement::Return(value))
}
