//! Unit tests for AST node rendering.
//!
//! This module contains tests for the render pass over every node family:
//! - Type name mapping for all four kinds
//! - Expression rendering, including full parenthesization
//! - Statement rendering and indentation depth
//! - Parameter, function and contract rendering

use super::{
    ast::{Contract, Function, Parameter},
    expressions::{BinaryOp, Expr, LiteralKind, UnaryOp},
    statements::{AssignmentStmt, IfStmt, ReturnStmt, Stmt, VarDeclStmt},
    types::{DataType, TypeKind},
};
use crate::{MK_ADDR, MK_BINARY, MK_BOOL, MK_IDENT, MK_INT, MK_UNARY};

#[test]
fn test_cpp_type_names() {
    assert_eq!(DataType::new(TypeKind::Uint).cpp_name(), "uint32_t");
    assert_eq!(DataType::new(TypeKind::Int).cpp_name(), "int32_t");
    assert_eq!(DataType::new(TypeKind::Bool).cpp_name(), "bool");
    assert_eq!(DataType::new(TypeKind::Address).cpp_name(), "uint64_t");
}

#[test]
fn test_literal_renders_verbatim() {
    assert_eq!(MK_INT!("42").render(), "42");
    assert_eq!(MK_BOOL!("true").render(), "true");
    assert_eq!(MK_ADDR!("0xDEADBEEF").render(), "0xDEADBEEF");

    // Literal text is never validated against its kind
    let odd = Expr::Literal {
        kind: LiteralKind::Boolean,
        value: String::from("not_a_bool"),
    };
    assert_eq!(odd.render(), "not_a_bool");
}

#[test]
fn test_identifier_renders_verbatim() {
    assert_eq!(MK_IDENT!("balance").render(), "balance");
}

#[test]
fn test_binary_operator_symbols() {
    let cases = [
        (BinaryOp::Add, "(a + b)"),
        (BinaryOp::Sub, "(a - b)"),
        (BinaryOp::Mul, "(a * b)"),
        (BinaryOp::Div, "(a / b)"),
        (BinaryOp::Mod, "(a % b)"),
        (BinaryOp::Eq, "(a == b)"),
        (BinaryOp::Ne, "(a != b)"),
        (BinaryOp::Gt, "(a > b)"),
        (BinaryOp::Lt, "(a < b)"),
        (BinaryOp::Ge, "(a >= b)"),
        (BinaryOp::Le, "(a <= b)"),
        (BinaryOp::And, "(a && b)"),
        (BinaryOp::Or, "(a || b)"),
    ];

    for (op, expected) in cases {
        let expr = MK_BINARY!(op, MK_IDENT!("a"), MK_IDENT!("b"));
        assert_eq!(expr.render(), expected);
    }
}

#[test]
fn test_nested_binary_fully_parenthesized() {
    let expr = MK_BINARY!(
        BinaryOp::Add,
        MK_IDENT!("a"),
        MK_BINARY!(BinaryOp::Mul, MK_IDENT!("b"), MK_IDENT!("c"))
    );
    assert_eq!(expr.render(), "(a + (b * c))");

    let expr = MK_BINARY!(
        BinaryOp::Or,
        MK_BINARY!(BinaryOp::Lt, MK_IDENT!("x"), MK_INT!("10")),
        MK_BINARY!(BinaryOp::Eq, MK_IDENT!("y"), MK_INT!("0"))
    );
    assert_eq!(expr.render(), "((x < 10) || (y == 0))");
}

#[test]
fn test_unary_not() {
    assert_eq!(MK_UNARY!(UnaryOp::Not, MK_IDENT!("ok")).render(), "(!ok)");
}

#[test]
fn test_unary_negate() {
    assert_eq!(MK_UNARY!(UnaryOp::Negate, MK_INT!("5")).render(), "(-5)");
}

#[test]
fn test_var_decl_with_initializer() {
    let stmt = VarDeclStmt::new(DataType::new(TypeKind::Uint), "x", Some(MK_INT!("5")));
    assert_eq!(stmt.render(0), "uint32_t x = 5;\n");
}

#[test]
fn test_var_decl_without_initializer() {
    let stmt = VarDeclStmt::new(DataType::new(TypeKind::Int), "y", None);
    assert_eq!(stmt.render(0), "int32_t y;\n");
}

#[test]
fn test_var_decl_indentation() {
    let stmt = VarDeclStmt::new(DataType::new(TypeKind::Bool), "flag", Some(MK_BOOL!("true")));
    assert_eq!(stmt.render(2), "        bool flag = true;\n");
}

#[test]
fn test_assignment() {
    let stmt = AssignmentStmt::new(
        "total",
        MK_BINARY!(BinaryOp::Add, MK_IDENT!("total"), MK_INT!("1")),
    );
    assert_eq!(stmt.render(1), "    total = (total + 1);\n");
}

#[test]
fn test_return() {
    let stmt = ReturnStmt::new(MK_IDENT!("x"));
    assert_eq!(stmt.render(1), "    return x;\n");
}

#[test]
fn test_if_without_else() {
    let mut stmt = IfStmt::new(MK_BINARY!(BinaryOp::Gt, MK_IDENT!("x"), MK_INT!("0")));
    stmt.then_body
        .push(Stmt::Return(ReturnStmt::new(MK_IDENT!("x"))));

    let rendered = stmt.render(0);
    assert_eq!(rendered, "if ((x > 0)) {\n    return x;\n}\n");
    assert!(!rendered.contains("} else {"));
}

#[test]
fn test_if_with_else() {
    let mut stmt = IfStmt::new(MK_IDENT!("ok"));
    stmt.then_body
        .push(Stmt::Return(ReturnStmt::new(MK_INT!("1"))));
    stmt.else_body
        .push(Stmt::Return(ReturnStmt::new(MK_INT!("0"))));

    assert_eq!(
        stmt.render(0),
        "if (ok) {\n    return 1;\n} else {\n    return 0;\n}\n"
    );
}

#[test]
fn test_nested_if_indentation() {
    let mut inner = IfStmt::new(MK_IDENT!("b"));
    inner
        .then_body
        .push(Stmt::Return(ReturnStmt::new(MK_INT!("2"))));

    let mut outer = IfStmt::new(MK_IDENT!("a"));
    outer.then_body.push(Stmt::If(inner));

    // Each nesting level adds exactly one indentation step of four spaces
    assert_eq!(
        outer.render(1),
        "    if (a) {\n        if (b) {\n            return 2;\n        }\n    }\n"
    );
}

#[test]
fn test_parameter_render() {
    let parameter = Parameter::new(DataType::new(TypeKind::Address), "owner");
    assert_eq!(parameter.render(), "uint64_t owner");
}

#[test]
fn test_function_signature_with_parameters() {
    let mut function = Function::new("transfer", DataType::new(TypeKind::Bool));
    function
        .parameters
        .push(Parameter::new(DataType::new(TypeKind::Address), "to"));
    function
        .parameters
        .push(Parameter::new(DataType::new(TypeKind::Uint), "amount"));
    function
        .body
        .push(Stmt::Return(ReturnStmt::new(MK_BOOL!("true"))));

    assert_eq!(
        function.render(),
        "bool transfer(uint64_t to, uint32_t amount) {\n    return true;\n}\n\n"
    );
}

#[test]
fn test_function_no_parameters_empty_body() {
    let function = Function::new("noop", DataType::new(TypeKind::Uint));
    assert_eq!(function.render(), "uint32_t noop() {\n}\n\n");
}

#[test]
fn test_contract_orders_variables_then_functions() {
    let mut contract = Contract::new("Ordered");
    contract.add_variable(VarDeclStmt::new(
        DataType::new(TypeKind::Uint),
        "g1",
        Some(MK_INT!("1")),
    ));
    contract.add_variable(VarDeclStmt::new(
        DataType::new(TypeKind::Uint),
        "g2",
        Some(MK_INT!("2")),
    ));
    contract.add_function(Function::new("f1", DataType::new(TypeKind::Uint)));
    contract.add_function(Function::new("f2", DataType::new(TypeKind::Uint)));

    let rendered = contract.render();
    let g1 = rendered.find("uint32_t g1").unwrap();
    let g2 = rendered.find("uint32_t g2").unwrap();
    let f1 = rendered.find("uint32_t f1").unwrap();
    let f2 = rendered.find("uint32_t f2").unwrap();

    assert!(g1 < g2);
    assert!(g2 < f1);
    assert!(f1 < f2);
}
