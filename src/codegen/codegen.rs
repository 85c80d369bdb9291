use std::{fs, path::Path};

use crate::{ast::ast::Contract, errors::errors::CodegenError};

/// Renders a contract into a complete C++ compilation unit.
///
/// Pure and idempotent: repeated calls over an unmodified contract yield
/// identical text.
pub fn generate(contract: &Contract) -> String {
    contract.render()
}

/// Writes generated code verbatim to the given path.
///
/// Performs no parsing, formatting or validation of the text.
pub fn write_to_file(code: &str, path: &Path) -> Result<(), CodegenError> {
    fs::write(path, code).map_err(|source| CodegenError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
