//! Code generation module.
//!
//! This module contains the driver that turns a contract AST into C++
//! source text and the persistence collaborator that writes it out. It
//! handles:
//!
//! - Invoking the root render pass over a contract
//! - Writing the generated text verbatim to a target path
//!
//! Generation is a pure traversal; writing is the only fallible step.

pub mod codegen;
