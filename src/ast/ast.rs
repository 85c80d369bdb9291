use super::{
    statements::{Stmt, VarDeclStmt},
    types::DataType,
};

/// Function Parameter
/// A (type, name) pair rendered only inside a function signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub type_: DataType,
    pub name: String,
}

impl Parameter {
    pub fn new(type_: DataType, name: &str) -> Self {
        Parameter {
            type_,
            name: String::from(name),
        }
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.type_.cpp_name(), self.name)
    }
}

/// Function
/// A named function with ordered parameters, a return type and an ordered
/// body of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: DataType,
    pub body: Vec<Stmt>,
}

impl Function {
    /// Creates a function with no parameters and an empty body.
    pub fn new(name: &str, return_type: DataType) -> Self {
        Function {
            name: String::from(name),
            parameters: Vec::new(),
            return_type,
            body: Vec::new(),
        }
    }

    /// Renders the complete function definition.
    ///
    /// Body statements render at depth 1; the closing brace is followed by a
    /// blank line that separates consecutive functions.
    pub fn render(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.render())
            .collect::<Vec<String>>()
            .join(", ");

        let mut result = format!(
            "{} {}({}) {{\n",
            self.return_type.cpp_name(),
            self.name,
            parameters
        );

        for stmt in &self.body {
            result.push_str(&stmt.render(1));
        }

        result.push_str("}\n\n");
        result
    }
}

/// Contract
/// The root AST node: an ordered list of global variable declarations and an
/// ordered list of functions, rendered as one complete compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub name: String,
    pub variables: Vec<VarDeclStmt>,
    pub functions: Vec<Function>,
}

impl Contract {
    pub fn new(name: &str) -> Self {
        Contract {
            name: String::from(name),
            variables: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Appends a global variable declaration. Insertion order is the
    /// rendering order.
    pub fn add_variable(&mut self, variable: VarDeclStmt) {
        self.variables.push(variable);
    }

    /// Appends a function. Insertion order is the rendering order.
    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    /// Renders the whole compilation unit.
    ///
    /// Output order is fixed: include preamble, globals at depth 0, a blank
    /// line, every function, then a synthetic `main` entry point. The entry
    /// point is appended even when the contract declares a `main` of its own.
    pub fn render(&self) -> String {
        let mut result = String::from("#include <cstdint>\n#include <iostream>\n\n");

        for variable in &self.variables {
            result.push_str(&variable.render(0));
        }

        result.push('\n');

        for function in &self.functions {
            result.push_str(&function.render());
        }

        result.push_str("int main() {\n");
        result.push_str("    // Call some functions to demonstrate compilation\n");
        result.push_str("    return 0;\n");
        result.push_str("}\n");

        result
    }
}
