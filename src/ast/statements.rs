use crate::indent_str;

use super::{expressions::Expr, types::DataType};

/// Variable Declaration Statement
/// Declares a variable, optionally with an initializer expression.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub type_: DataType,
    pub name: String,
    pub initializer: Option<Expr>,
}

impl VarDeclStmt {
    pub fn new(type_: DataType, name: &str, initializer: Option<Expr>) -> Self {
        VarDeclStmt {
            type_,
            name: String::from(name),
            initializer,
        }
    }

    pub fn render(&self, indent: usize) -> String {
        let mut result = format!("{}{} {}", indent_str(indent), self.type_.cpp_name(), self.name);

        if let Some(initializer) = &self.initializer {
            result.push_str(" = ");
            result.push_str(&initializer.render());
        }

        result.push_str(";\n");
        result
    }
}

/// Assignment Statement
/// Assigns an expression to a named target. The target name is not checked
/// against any declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: String,
    pub value: Expr,
}

impl AssignmentStmt {
    pub fn new(target: &str, value: Expr) -> Self {
        AssignmentStmt {
            target: String::from(target),
            value,
        }
    }

    pub fn render(&self, indent: usize) -> String {
        format!(
            "{}{} = {};\n",
            indent_str(indent),
            self.target,
            self.value.render()
        )
    }
}

/// If Statement
/// A conditional with an ordered then-branch and an optional else-branch.
///
/// An empty else body means no else-clause is emitted at all.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Vec<Stmt>,
}

impl IfStmt {
    pub fn new(condition: Expr) -> Self {
        IfStmt {
            condition,
            then_body: Vec::new(),
            else_body: Vec::new(),
        }
    }

    pub fn render(&self, indent: usize) -> String {
        let indentation = indent_str(indent);
        let mut result = format!("{}if ({}) {{\n", indentation, self.condition.render());

        for stmt in &self.then_body {
            result.push_str(&stmt.render(indent + 1));
        }

        if !self.else_body.is_empty() {
            result.push_str(&indentation);
            result.push_str("} else {\n");
            for stmt in &self.else_body {
                result.push_str(&stmt.render(indent + 1));
            }
        }

        result.push_str(&indentation);
        result.push_str("}\n");
        result
    }
}

/// Return Statement
/// Returns an expression; there is no bare `return` form.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
}

impl ReturnStmt {
    pub fn new(value: Expr) -> Self {
        ReturnStmt { value }
    }

    pub fn render(&self, indent: usize) -> String {
        format!("{}return {};\n", indent_str(indent), self.value.render())
    }
}

/// Statement Node
/// The closed set of statements a function body (or branch body) can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    Return(ReturnStmt),
}

impl Stmt {
    /// Renders the statement as one or more newline-terminated lines, each
    /// prefixed with the leading whitespace for `indent`.
    pub fn render(&self, indent: usize) -> String {
        match self {
            Stmt::VarDecl(stmt) => stmt.render(indent),
            Stmt::Assignment(stmt) => stmt.render(indent),
            Stmt::If(stmt) => stmt.render(indent),
            Stmt::Return(stmt) => stmt.render(indent),
        }
    }
}
