//! Error types for the code generator.
//!
//! Rendering itself is infallible: unknown type tags fall back to the
//! unsigned 32-bit type and literal text is emitted verbatim. The only
//! genuine failure in the crate is persistence of generated code, and the
//! error variants here cover exactly that.

pub mod errors;

#[cfg(test)]
mod tests;
