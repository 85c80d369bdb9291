//! Utility macros for the code generator.
//!
//! This module defines helper macros used to build expression nodes:
//!
//! - `MK_INT!` / `MK_BOOL!` / `MK_ADDR!` - Create literal expressions
//! - `MK_IDENT!` - Creates an identifier expression
//! - `MK_BINARY!` / `MK_UNARY!` - Create operator expressions
//!
//! These macros reduce boilerplate when assembling expression trees by hand.

/// Creates an integer literal expression.
///
/// # Example
///
/// ```ignore
/// let five = MK_INT!("5");
/// ```
#[macro_export]
macro_rules! MK_INT {
    ($value:expr) => {
        $crate::ast::expressions::Expr::Literal {
            kind: $crate::ast::expressions::LiteralKind::Integer,
            value: String::from($value),
        }
    };
}

/// Creates a boolean literal expression.
#[macro_export]
macro_rules! MK_BOOL {
    ($value:expr) => {
        $crate::ast::expressions::Expr::Literal {
            kind: $crate::ast::expressions::LiteralKind::Boolean,
            value: String::from($value),
        }
    };
}

/// Creates an address literal expression.
#[macro_export]
macro_rules! MK_ADDR {
    ($value:expr) => {
        $crate::ast::expressions::Expr::Literal {
            kind: $crate::ast::expressions::LiteralKind::Address,
            value: String::from($value),
        }
    };
}

/// Creates an identifier expression.
#[macro_export]
macro_rules! MK_IDENT {
    ($name:expr) => {
        $crate::ast::expressions::Expr::Identifier {
            name: String::from($name),
        }
    };
}

/// Creates a binary operation expression, boxing both operands.
///
/// # Example
///
/// ```ignore
/// let sum = MK_BINARY!(BinaryOp::Add, MK_IDENT!("a"), MK_INT!("1"));
/// ```
#[macro_export]
macro_rules! MK_BINARY {
    ($op:expr, $left:expr, $right:expr) => {
        $crate::ast::expressions::Expr::Binary {
            op: $op,
            left: Box::new($left),
            right: Box::new($right),
        }
    };
}

/// Creates a unary operation expression, boxing the operand.
#[macro_export]
macro_rules! MK_UNARY {
    ($op:expr, $operand:expr) => {
        $crate::ast::expressions::Expr::Unary {
            op: $op,
            operand: Box::new($operand),
        }
    };
}
