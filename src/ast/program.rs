use super::{expressions::Variable, statements::Statement};

pub const ENTRY_FUNCTION_NAME: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<Variable>,
    pub body: Statement,
}

impl FunctionDeclaration {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A parsed program: every declared function followed by the synthesized entry function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub functions: Vec<FunctionDeclaration>,
    /// Index of the entry function in `functions`.
    pub entry: usize,
}

impl Program {
    /// Appends a zero-parameter `main` running `body` after the declared functions.
    pub fn with_entry(mut functions: Vec<FunctionDeclaration>, body: Statement) -> Self {
        functions.push(FunctionDeclaration {
            name: String::from(ENTRY_FUNCTION_NAME),
            parameters: vec![],
            body,
        });

        Program {
            entry: functions.len() - 1,
            functions,
        }
    }

    pub fn entry_function(&self) -> &FunctionDeclaration {
        &self.functions[self.entry]
    }

    /// Functions declared in the source, without the entry function.
    pub fn declared_functions(&self) -> impl Iterator<Item = &FunctionDeclaration> {
        self.functions
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index != self.entry)
            .map(|(_, function)| function)
    }
}
