//! Unit tests for the parser module.
//!
//! This module contains tests for parsing language constructs including:
//! - Operator precedence and associativity
//! - Atoms: literals, calls, negation, grouping and strings
//! - Control flow statements and their desugaring
//! - Top-level assembly into the entry function
//! - Error positions and expected tokens

use std::rc::Rc;

use crate::{
    ast::{
        expressions::{BinaryOperator, CallTarget, Expression, FunctionCall, UnresolvedFunction, Variable},
        program::Program,
        statements::Statement,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::tokenize, tokens::TokenKind},
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    parse(tokens, Rc::new("test.lang".to_string()))
}

/// Parses `x := <source>` and returns the assigned expression.
fn parse_expression(source: &str) -> Expression {
    let program = parse_source(&format!("x := {}", source)).unwrap();

    match &program.entry_function().body {
        Statement::Assign { value, .. } => value.clone(),
        other => panic!("Expected assignment, got {:?}", other),
    }
}

fn main_body(source: &str) -> Statement {
    parse_source(source).unwrap().entry_function().body.clone()
}

fn expected_tokens(error: &Error) -> Vec<TokenKind> {
    match error.get_internal_error() {
        ErrorImpl::UnexpectedToken { expected, .. } => expected.clone(),
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn bin(left: Expression, right: Expression, operator: BinaryOperator) -> Expression {
    Expression::binary(left, right, operator)
}

#[test]
fn test_parse_precedence() {
    assert_eq!(
        parse_expression("1+2*3"),
        bin(
            Expression::Const(1),
            bin(Expression::Const(2), Expression::Const(3), BinaryOperator::Times),
            BinaryOperator::Plus
        )
    );
}

#[test]
fn test_parse_left_associativity() {
    assert_eq!(
        parse_expression("8-3-2"),
        bin(
            bin(Expression::Const(8), Expression::Const(3), BinaryOperator::Minus),
            Expression::Const(2),
            BinaryOperator::Minus
        )
    );

    assert_eq!(
        parse_expression("a / b % c"),
        bin(bin(var("a"), var("b"), BinaryOperator::Div), var("c"), BinaryOperator::Rem)
    );
}

#[test]
fn test_parse_logical_precedence() {
    // or < and < comparison < additive
    assert_eq!(
        parse_expression("a !! b && c == d + 1"),
        bin(
            var("a"),
            bin(
                var("b"),
                bin(var("c"), bin(var("d"), Expression::Const(1), BinaryOperator::Plus), BinaryOperator::Eq),
                BinaryOperator::And
            ),
            BinaryOperator::Or
        )
    );
}

#[test]
fn test_parse_every_comparison_operator() {
    for (source, operator) in [
        ("a < b", BinaryOperator::Lt),
        ("a > b", BinaryOperator::Gt),
        ("a == b", BinaryOperator::Eq),
        ("a != b", BinaryOperator::Neq),
        ("a <= b", BinaryOperator::Leq),
        ("a >= b", BinaryOperator::Geq),
    ] {
        assert_eq!(parse_expression(source), bin(var("a"), var("b"), operator));
    }
}

#[test]
fn test_parse_chained_comparison_fails() {
    let error = parse_source("x := 1<2<3").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    // The second `<` is left over after `1<2`.
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_parse_parenthesized_comparisons() {
    assert_eq!(
        parse_expression("(1<2)<3"),
        bin(
            bin(Expression::Const(1), Expression::Const(2), BinaryOperator::Lt),
            Expression::Const(3),
            BinaryOperator::Lt
        )
    );
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse_expression("'a'"), Expression::Const(97));
    assert_eq!(parse_expression("true"), Expression::Const(1));
    assert_eq!(parse_expression("false"), Expression::Const(0));
    assert_eq!(parse_expression("\"hi there\""), Expression::StringLiteral("hi there".to_string()));
    assert_eq!(parse_expression(r#""a\n""#), Expression::StringLiteral(r"a\n".to_string()));
}

#[test]
fn test_parse_number_overflow() {
    let error = parse_source("x := 99999999999").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_parse_not_binds_to_term() {
    assert_eq!(
        parse_expression("!a + b"),
        bin(Expression::not(var("a")), var("b"), BinaryOperator::Plus)
    );
    assert_eq!(
        parse_expression("!(a + b)"),
        Expression::not(bin(var("a"), var("b"), BinaryOperator::Plus))
    );
    assert_eq!(parse_expression("! !a"), Expression::not(Expression::not(var("a"))));
}

#[test]
fn test_parse_function_call_expression() {
    assert_eq!(
        parse_expression("f(1, y + 2, g())"),
        Expression::FunctionCall(FunctionCall {
            target: CallTarget::Unresolved(UnresolvedFunction {
                name: "f".to_string(),
                arity: 3,
            }),
            arguments: vec![
                Expression::Const(1),
                bin(var("y"), Expression::Const(2), BinaryOperator::Plus),
                Expression::FunctionCall(FunctionCall::unresolved("g", vec![])),
            ],
        })
    );
}

#[test]
fn test_parse_identifier_with_keyword_prefix() {
    assert_eq!(main_body("ifValue := done"), Statement::assign("ifValue", var("done")));
}

#[test]
fn test_parse_statements() {
    assert_eq!(main_body("skip"), Statement::Skip);
    assert_eq!(main_body("return 0"), Statement::Return(Expression::Const(0)));
    assert_eq!(
        main_body("write(x)"),
        Statement::FunctionCall(FunctionCall::unresolved("write", vec![var("x")]))
    );
}

#[test]
fn test_parse_if_elif_else() {
    let body = main_body("if a then x := 1 elif b then x := 2 elif c then x := 3 else x := 4 fi");

    assert_eq!(
        body,
        Statement::if_else(
            var("a"),
            Statement::assign("x", Expression::Const(1)),
            Statement::if_else(
                var("b"),
                Statement::assign("x", Expression::Const(2)),
                Statement::if_else(
                    var("c"),
                    Statement::assign("x", Expression::Const(3)),
                    Statement::assign("x", Expression::Const(4))
                )
            )
        )
    );
}

#[test]
fn test_parse_if_without_else() {
    assert_eq!(
        main_body("if a then skip elif b then return 1 fi"),
        Statement::if_else(
            var("a"),
            Statement::Skip,
            Statement::if_else(var("b"), Statement::Return(Expression::Const(1)), Statement::Skip)
        )
    );
}

#[test]
fn test_parse_while() {
    assert_eq!(
        main_body("while i < 3 do i := i + 1 od"),
        Statement::while_loop(
            bin(var("i"), Expression::Const(3), BinaryOperator::Lt),
            Statement::assign("i", bin(var("i"), Expression::Const(1), BinaryOperator::Plus))
        )
    );
}

#[test]
fn test_parse_for_desugaring() {
    assert_eq!(
        main_body("for i:=0,i<10,i:=i+1 do skip od"),
        Statement::chain(
            Statement::assign("i", Expression::Const(0)),
            Statement::while_loop(
                bin(var("i"), Expression::Const(10), BinaryOperator::Lt),
                Statement::chain(
                    Statement::Skip,
                    Statement::assign("i", bin(var("i"), Expression::Const(1), BinaryOperator::Plus))
                )
            )
        )
    );
}

#[test]
fn test_parse_repeat_desugaring() {
    assert_eq!(
        main_body("repeat skip until true"),
        Statement::chain(
            Statement::Skip,
            Statement::while_loop(Expression::not(Expression::Const(1)), Statement::Skip)
        )
    );
}

#[test]
fn test_parse_block_sequencing() {
    let a = Statement::assign("a", Expression::Const(1));
    let b = Statement::assign("b", Expression::Const(2));
    let c = Statement::assign("c", Expression::Const(3));

    assert_eq!(
        main_body("while x do a := 1; b := 2; c := 3; od"),
        Statement::while_loop(var("x"), Statement::chain(a, Statement::chain(b, c)))
    );
}

#[test]
fn test_parse_block_requires_separators() {
    assert!(parse_source("while x do a := 1 b := 2 od").is_err());
}

#[test]
fn test_parse_empty_block_fails() {
    let error = parse_source("while x do od").unwrap_err();

    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_parse_double_semicolon_fails() {
    assert!(parse_source("while x do skip;; od").is_err());
}

#[test]
fn test_parse_missing_fi() {
    let error = parse_source("if x then skip").unwrap_err();
    let expected = expected_tokens(&error);

    assert_eq!(error.get_position().0, 14);
    assert!(expected.contains(&TokenKind::Fi));
    assert!(expected.contains(&TokenKind::Elif));
    assert!(expected.contains(&TokenKind::Else));
}

#[test]
fn test_parse_missing_od_reports_furthest_failure() {
    let error = parse_source("while x do y := 1 + 2 skip").unwrap_err();
    let expected = expected_tokens(&error);

    // Reported at `skip`, not at the `while` where the statement started.
    assert_eq!(error.get_position().0, 22);
    assert!(expected.contains(&TokenKind::Od));
    assert!(expected.contains(&TokenKind::Plus));
}

#[test]
fn test_parse_missing_end() {
    let error = parse_source("fun f() begin return 1").unwrap_err();

    assert!(expected_tokens(&error).contains(&TokenKind::End));
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_source("fun add(a, b) begin return a + b end").unwrap();

    assert_eq!(program.functions.len(), 2);
    assert_eq!(program.functions[0].name, "add");
    assert_eq!(program.functions[0].parameters, vec![Variable::new("a"), Variable::new("b")]);
    assert_eq!(
        program.functions[0].body,
        Statement::Return(bin(var("a"), var("b"), BinaryOperator::Plus))
    );
}

#[test]
fn test_parse_duplicate_names_pass_through() {
    let program = parse_source("fun f(a, a) begin skip end fun f() begin skip end").unwrap();

    assert_eq!(program.functions.len(), 3);
    assert_eq!(program.functions[0].parameters.len(), 2);
    assert_eq!(program.functions[1].name, "f");
}

#[test]
fn test_parse_top_level_interleaving() {
    let program = parse_source("x:=1; fun f() begin return 1 end; y:=2").unwrap();

    assert_eq!(program.functions.len(), 2);
    assert_eq!(program.functions[0].name, "f");
    assert_eq!(program.functions[0].arity(), 0);
    assert_eq!(program.entry, 1);

    let main = program.entry_function();
    assert_eq!(main.name, "main");
    assert!(main.parameters.is_empty());
    assert_eq!(
        main.body,
        Statement::chain(
            Statement::assign("x", Expression::Const(1)),
            Statement::assign("y", Expression::Const(2))
        )
    );
}

#[test]
fn test_parse_top_level_without_separators() {
    assert_eq!(
        main_body("x := 1 y := 2"),
        Statement::chain(
            Statement::assign("x", Expression::Const(1)),
            Statement::assign("y", Expression::Const(2))
        )
    );
}

#[test]
fn test_parse_only_declarations_gives_skip_main() {
    let program = parse_source("fun f() begin return 1 end").unwrap();

    assert_eq!(program.entry_function().body, Statement::Skip);
    assert_eq!(program.declared_functions().count(), 1);
}

#[test]
fn test_parse_empty_source_fails() {
    let error = parse_source("").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 0);
    assert!(expected_tokens(&error).contains(&TokenKind::Fun));
    assert!(expected_tokens(&error).contains(&TokenKind::Identifier));
}

#[test]
fn test_parse_whitespace_only_source_fails() {
    let error = parse_source("  \n\t ").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_parse_unclosed_call_falls_back_and_fails() {
    assert!(parse_source("x := f(1").is_err());
}

#[test]
fn test_parse_brackets_have_no_grammar() {
    assert!(parse_source("x := [1]").is_err());
}
