use tracing::debug;

use crate::{
    ast::{
        expressions::{CallTarget, Expression, FunctionCall, FunctionRef},
        program::{FunctionDeclaration, Program},
        statements::Statement,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Declared functions visible to call sites, in declaration order.
struct Resolver {
    functions: Vec<(String, usize)>,
    resolved: usize,
}

impl Resolver {
    fn new(functions: &[FunctionDeclaration]) -> Self {
        Resolver {
            functions: functions
                .iter()
                .map(|function| (function.name.clone(), function.arity()))
                .collect(),
            resolved: 0,
        }
    }

    /// The first declaration with this exact name and parameter count.
    fn lookup(&self, name: &str, arity: usize) -> Result<FunctionRef, Error> {
        let index = self
            .functions
            .iter()
            .position(|(function, params)| function == name && *params == arity);

        match index {
            Some(index) => Ok(FunctionRef {
                name: name.to_string(),
                index,
            }),
            None => {
                let candidates = self
                    .functions
                    .iter()
                    .filter(|(function, _)| function == name)
                    .map(|(_, params)| *params)
                    .collect();

                Err(Error::new(
                    ErrorImpl::UnresolvedCall {
                        name: name.to_string(),
                        arity,
                        candidates,
                    },
                    Position::null(),
                ))
            }
        }
    }

    fn resolve_call(&mut self, call: &mut FunctionCall) -> Result<(), Error> {
        for argument in call.arguments.iter_mut() {
            self.resolve_expr(argument)?;
        }

        if let CallTarget::Unresolved(function) = &call.target {
            let target = self.lookup(&function.name, function.arity)?;
            debug!(call = call.target.name(), index = target.index, "resolved call");

            call.target = CallTarget::Resolved(target);
            self.resolved += 1;
        }

        Ok(())
    }

    fn resolve_expr(&mut self, expr: &mut Expression) -> Result<(), Error> {
        match expr {
            Expression::Const(_) | Expression::Variable(_) | Expression::StringLiteral(_) => Ok(()),
            Expression::UnaryOperation { operand, .. } => self.resolve_expr(operand),
            Expression::BinaryOperation { left, right, .. } => {
                self.resolve_expr(left)?;
                self.resolve_expr(right)
            }
            Expression::FunctionCall(call) => self.resolve_call(call),
        }
    }

    fn resolve_stmt(&mut self, stmt: &mut Statement) -> Result<(), Error> {
        match stmt {
            Statement::Skip => Ok(()),
            Statement::Assign { value, .. } => self.resolve_expr(value),
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition)?;
                self.resolve_stmt(then_branch)?;
                self.resolve_stmt(else_branch)
            }
            Statement::While { condition, body } => {
                self.resolve_expr(condition)?;
                self.resolve_stmt(body)
            }
            Statement::Chain { first, second } => {
                self.resolve_stmt(first)?;
                self.resolve_stmt(second)
            }
            Statement::Return(value) => self.resolve_expr(value),
            Statement::FunctionCall(call) => self.resolve_call(call),
        }
    }
}

/// Binds every call site in `program` to a declared function.
///
/// A call `f(a, b)` resolves to the first function named `f` taking exactly two
/// parameters. Only call targets change; the shape of the tree is untouched.
/// Calls that are already resolved are left as they are.
pub fn resolve_calls(mut program: Program) -> Result<Program, Error> {
    let mut resolver = Resolver::new(&program.functions);

    for function in program.functions.iter_mut() {
        resolver.resolve_stmt(&mut function.body)?;
    }

    debug!(calls = resolver.resolved, "resolved calls");
    Ok(program)
}
