use tracing::debug;

use crate::{
    ast::{
        expressions::Variable,
        program::{FunctionDeclaration, Program},
        statements::Statement,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::ITEM_ALTERNATIVES,
    parser::Parser,
    stmt::{parse_block, parse_stmt},
};

/// A top-level item: either a function declaration or a loose statement.
#[derive(Debug)]
pub enum TopLevelItem {
    Function(FunctionDeclaration),
    Statement(Statement),
}

/// `fun name ( [param {, param}] ) begin B end [;]`
///
/// Duplicate parameter names are accepted as written.
pub fn parse_fn_decl_item(parser: &mut Parser) -> Result<TopLevelItem, Error> {
    parser.expect(TokenKind::Fun)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parser.separated(parse_parameter, TokenKind::Comma, true)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::Begin)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::End)?;
    parser.eat(TokenKind::Semicolon);

    Ok(TopLevelItem::Function(FunctionDeclaration {
        name,
        parameters,
        body,
    }))
}

fn parse_parameter(parser: &mut Parser) -> Result<Variable, Error> {
    Ok(Variable::new(parser.expect(TokenKind::Identifier)?.value))
}

/// A loose statement with an optional trailing `;`.
pub fn parse_stmt_item(parser: &mut Parser) -> Result<TopLevelItem, Error> {
    let statement = parse_stmt(parser)?;
    parser.eat(TokenKind::Semicolon);

    Ok(TopLevelItem::Statement(statement))
}

/// Parses every top-level item and assembles the program. At least one item
/// is required.
///
/// Declarations keep their source order. Loose statements are chained in
/// source order into the body of a synthesized zero-parameter `main`, which is
/// appended after the declarations; its body is `Skip` when there are none.
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let mut items = vec![parser.choice(&ITEM_ALTERNATIVES)?];
    while !parser.is_at_end() {
        items.push(parser.choice(&ITEM_ALTERNATIVES)?);
    }

    let mut functions = vec![];
    let mut statements = vec![];
    for item in items {
        match item {
            TopLevelItem::Function(function) => functions.push(function),
            TopLevelItem::Statement(statement) => statements.push(statement),
        }
    }

    debug!(
        functions = functions.len(),
        statements = statements.len(),
        "assembling entry function"
    );

    Ok(Program::with_entry(functions, Statement::chain_of(statements)))
}
