//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the backtracking recursive-descent parser that turns
//! a stream of tokens into a `Program`. It handles:
//!
//! - Expression parsing by precedence level (or, and, comparison, additive,
//!   multiplicative, unary not, atoms)
//! - Statement parsing, with `for` and `repeat` desugared into `while` and `Chain`
//! - Assembly of top-level statements into a synthesized `main` function
//!
//! Ordered alternatives for atoms, statements and top-level items live in
//! `lookups`; their order decides which reading of a token sequence wins.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod program;
pub mod stmt;

#[cfg(test)]
mod tests;
