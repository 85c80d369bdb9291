#![allow(clippy::module_inception)]

pub mod ast;
pub mod builder;
pub mod codegen;
pub mod errors;
pub mod macros;

/// Number of spaces per indentation level in generated code.
pub const INDENT_WIDTH: usize = 4;

/// Returns the leading whitespace for the given indentation depth.
pub fn indent_str(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}
