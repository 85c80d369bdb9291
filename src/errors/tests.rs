//! Unit tests for error handling.

use std::{io, path::PathBuf};

use super::errors::CodegenError;

#[test]
fn test_write_failed_error_name() {
    let error = CodegenError::WriteFailed {
        path: PathBuf::from("/no/such/dir/out.cpp"),
        source: io::Error::new(io::ErrorKind::NotFound, "missing directory"),
    };

    assert_eq!(error.get_error_name(), "WriteFailed");
}

#[test]
fn test_write_failed_display_includes_path() {
    let error = CodegenError::WriteFailed {
        path: PathBuf::from("/no/such/dir/out.cpp"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };

    let message = format!("{}", error);
    assert!(message.contains("failed to write generated code"));
    assert!(message.contains("out.cpp"));
}
