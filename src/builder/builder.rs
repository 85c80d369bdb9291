use std::path::Path;

use crate::{
    ast::{
        ast::{Contract, Function},
        expressions::{Expr, LiteralKind},
        statements::VarDeclStmt,
        types::DataType,
    },
    codegen::codegen,
    errors::errors::CodegenError,
};

use super::lookups::type_kind_for_tag;

/// Contract Builder
/// Append-only construction API over a single contract.
///
/// Wraps a contract from creation through rendering so callers work with
/// string tags and finished nodes instead of raw child lists. Children are
/// only ever appended, never removed or reordered.
#[derive(Debug)]
pub struct ContractBuilder {
    contract: Contract,
}

impl ContractBuilder {
    pub fn new(name: &str) -> Self {
        ContractBuilder {
            contract: Contract::new(name),
        }
    }

    /// Appends a global variable with an integer-literal initializer.
    ///
    /// The tag is one of `"uint"`, `"int"`, `"bool"` or `"address"`; any
    /// other tag resolves to the unsigned 32-bit type. The value text is
    /// stored verbatim.
    pub fn add_variable(&mut self, type_tag: &str, name: &str, value: &str) {
        let type_ = DataType::new(type_kind_for_tag(type_tag));
        let initializer = Expr::Literal {
            kind: LiteralKind::Integer,
            value: String::from(value),
        };

        self.contract
            .add_variable(VarDeclStmt::new(type_, name, Some(initializer)));
    }

    /// Appends a function with no parameters and an empty body, using the
    /// same four-way tag mapping for the return type.
    pub fn add_function(&mut self, name: &str, return_tag: &str) {
        let return_type = DataType::new(type_kind_for_tag(return_tag));
        self.contract.add_function(Function::new(name, return_type));
    }

    /// Appends a fully constructed global declaration.
    pub fn push_variable(&mut self, variable: VarDeclStmt) {
        self.contract.add_variable(variable);
    }

    /// Appends a fully constructed function.
    pub fn push_function(&mut self, function: Function) {
        self.contract.add_function(function);
    }

    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Renders the contract as built so far.
    pub fn render(&self) -> String {
        codegen::generate(&self.contract)
    }

    /// Renders the contract and writes the result to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), CodegenError> {
        codegen::write_to_file(&self.render(), path)
    }

    /// Consumes the builder, returning the finished contract.
    pub fn finish(self) -> Contract {
        self.contract
    }
}
