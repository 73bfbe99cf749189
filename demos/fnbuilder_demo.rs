//! Hand-built in-memory walkthrough of the function-body IR builder, for
//! manual inspection. Not part of the library's tested contract — see
//! `tests/ir_function_build.rs` for the assertions this mirrors.
//!
//! Builds the "S1" scenario from the builder's scenario catalogue: a single
//! block computing `%2 = add %0, %1` then returning it.

use vmir_fnbuilder::ir::attrs::AttributeSets;
use vmir_fnbuilder::ir::function::{Function, FunctionContext};
use vmir_fnbuilder::ir::parse::parse_and_append;
use vmir_fnbuilder::ir::printer::format_function;
use vmir_fnbuilder::ir::types::{Type, TypeTable};
use vmir_fnbuilder::ir::value::{Value, ValueClass, ValueTable};
use vmir_fnbuilder::schema::blocks::FunctionCode;

fn main() {
    let mut types = TypeTable::new();
    let i32_ty = types.find_or_make(Type::Int(32));

    let mut values = ValueTable::new();
    values.push(Value { class: ValueClass::Temporary, type_id: i32_ty }); // %0 = arg a
    values.push(Value { class: ValueClass::Temporary, type_id: i32_ty }); // %1 = arg b

    let attrs = AttributeSets::new();
    let func = Function::new("add".into(), 1);
    let mut ctx = FunctionContext::new(func, &mut types, &mut values, &attrs);

    // %2 = add i32 %0, %1 (lhs vtp delta=2, rhs delta=1, opcode Add=0)
    parse_and_append(&mut ctx, FunctionCode::BinOp as u64, &[2, 1, 0]).expect("binop parses");
    // ret i32 %2 (vtp delta=1)
    parse_and_append(&mut ctx, FunctionCode::Ret as u64, &[1]).expect("ret parses");

    print!("{}", format_function(&ctx.function));
}
