use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced while persisting generated code.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("failed to write generated code to {path:?}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CodegenError {
    pub fn get_error_name(&self) -> &str {
        match self {
            CodegenError::WriteFailed { .. } => "WriteFailed",
        }
    }
}
