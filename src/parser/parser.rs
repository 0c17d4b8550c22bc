//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Grammar rules are plain functions over `&mut Parser`; ordered alternation
//! is done by `choice`, which tries each rule in turn and rewinds the token
//! cursor after every failed attempt.
//!
//! Failures are reported with furthest-failure semantics: the parser remembers
//! the deepest token index at which any rule failed, together with every token
//! kind that would have been accepted there, and reports that position rather
//! than the place where the last alternative happened to give up.

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::program::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::program::parse_program;

/// A grammar rule: consumes tokens on success, may leave the cursor anywhere on failure.
pub type Rule<T> = fn(&mut Parser) -> Result<T, Error>;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Furthest token index at which an expectation failed
    furthest: usize,
    /// Token kinds that would have been accepted at `furthest`
    expected: Vec<TokenKind>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span { start: end.clone(), end }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            furthest: 0,
            expected: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos.min(self.tokens.len() - 1);
        if self.tokens[current].kind != TokenKind::EOF {
            self.pos = current + 1;
        }
        &self.tokens[current]
    }

    /// Whether every token except `EOF` has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Expects a token of the specified kind and consumes it.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance().clone())
        } else {
            Err(self.unexpected(&[expected_kind]))
        }
    }

    /// Consumes a token of the specified kind if it is the current one.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        self.expect(kind).is_ok()
    }

    /// Records that one of `kinds` was expected at the current token and
    /// returns the resulting furthest-failure error.
    pub fn unexpected(&mut self, kinds: &[TokenKind]) -> Error {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }

        if self.pos == self.furthest {
            for kind in kinds {
                if !self.expected.contains(kind) {
                    self.expected.push(*kind);
                }
            }
        }

        self.furthest_error()
    }

    /// The error describing the deepest failure seen so far.
    pub fn furthest_error(&self) -> Error {
        let token = &self.tokens[self.furthest.min(self.tokens.len() - 1)];

        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                expected: self.expected.clone(),
            },
            token.span.start.clone(),
        )
    }

    /// Runs `rule`, rewinding the cursor if it fails.
    pub fn attempt<T>(&mut self, rule: impl FnOnce(&mut Parser) -> Result<T, Error>) -> Result<T, Error> {
        let start = self.pos;
        let result = rule(self);

        if result.is_err() {
            self.pos = start;
        }

        result
    }

    /// Runs `rule`, turning a recoverable failure into `None` with the cursor rewound.
    pub fn optional<T>(&mut self, rule: impl FnOnce(&mut Parser) -> Result<T, Error>) -> Result<Option<T>, Error> {
        match self.attempt(rule) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_recoverable() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Ordered choice: the first alternative that succeeds wins.
    pub fn choice<T>(&mut self, alternatives: &[Rule<T>]) -> Result<T, Error> {
        for alternative in alternatives {
            if let Some(value) = self.optional(*alternative)? {
                return Ok(value);
            }
        }

        Err(self.furthest_error())
    }

    /// Parses `term (separator term)*`.
    ///
    /// A separator that is not followed by a term is left unconsumed. With
    /// `accept_zero`, a missing first term yields an empty list.
    pub fn separated<T>(&mut self, term: Rule<T>, separator: TokenKind, accept_zero: bool) -> Result<Vec<T>, Error> {
        let first = if accept_zero {
            match self.optional(term)? {
                Some(first) => first,
                None => return Ok(vec![]),
            }
        } else {
            self.attempt(term)?
        };

        let mut terms = vec![first];
        while let Some(next) = self.optional(|parser| {
            parser.expect(separator)?;
            term(parser)
        })? {
            terms.push(next);
        }

        Ok(terms)
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> &Rc<String> {
        &self.file
    }
}

/// Parses a stream of tokens into a `Program`.
///
/// This is the main entry point for parsing. The whole token stream must be
/// consumed; otherwise the deepest failure encountered is reported.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file);

    match parse_program(&mut parser) {
        Ok(program) => {
            debug!(
                file = %parser.get_file(),
                functions = program.functions.len(),
                "parsed program"
            );
            Ok(program)
        }
        Err(error) => {
            let error = if error.is_recoverable() { parser.furthest_error() } else { error };
            debug!(file = %parser.get_file(), %error, "parse failed");
            Err(error)
        }
    }
}
