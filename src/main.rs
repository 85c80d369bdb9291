use std::{env, path::PathBuf, time::Instant};

use contractgen::{
    ast::{
        ast::{Function, Parameter},
        expressions::{BinaryOp, UnaryOp},
        statements::{AssignmentStmt, IfStmt, ReturnStmt, Stmt},
        types::{DataType, TypeKind},
    },
    builder::builder::ContractBuilder,
    codegen::codegen,
    MK_BINARY, MK_IDENT, MK_UNARY,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let output_path = PathBuf::from(&args[1]);

    let start = Instant::now();

    let mut builder = ContractBuilder::new("Demo");
    builder.add_variable("uint", "total", "0");
    builder.add_variable("bool", "locked", "0");

    let mut get_total = Function::new("get_total", DataType::new(TypeKind::Uint));
    get_total
        .body
        .push(Stmt::Return(ReturnStmt::new(MK_IDENT!("total"))));
    builder.push_function(get_total);

    let mut deposit = Function::new("deposit", DataType::new(TypeKind::Uint));
    deposit
        .parameters
        .push(Parameter::new(DataType::new(TypeKind::Uint), "amount"));

    let mut guard = IfStmt::new(MK_UNARY!(UnaryOp::Not, MK_IDENT!("locked")));
    guard.then_body.push(Stmt::Assignment(AssignmentStmt::new(
        "total",
        MK_BINARY!(BinaryOp::Add, MK_IDENT!("total"), MK_IDENT!("amount")),
    )));
    deposit.body.push(Stmt::If(guard));
    deposit
        .body
        .push(Stmt::Return(ReturnStmt::new(MK_IDENT!("total"))));
    builder.push_function(deposit);

    println!("Constructed AST in {:?}", start.elapsed());

    let render_start = Instant::now();
    let code = builder.render();

    println!(
        "Rendered {} bytes of C++ in {:?}",
        code.len(),
        render_start.elapsed()
    );

    if let Err(error) = codegen::write_to_file(&code, &output_path) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }

    println!("Wrote generated code to {}", output_path.display());
    println!("Total time: {:?}", start.elapsed());
}
