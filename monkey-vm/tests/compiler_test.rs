// monkey-vm - Compiler tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Instruction-level compiler tests: each case pins the exact instruction
//! sequence and constant pool a source snippet compiles to.

use monkey_core::Object;
use monkey_vm::code::{disassemble, make, Opcode};
use monkey_vm::{Bytecode, CompileError, Compiler};

fn compile(input: &str) -> Bytecode {
    let program = monkey_parser::parse(input).expect("parse error");
    let mut compiler = Compiler::new();
    compiler.compile(&program).expect("compile error");
    compiler.bytecode()
}

fn compile_err(input: &str) -> CompileError {
    let program = monkey_parser::parse(input).expect("parse error");
    let mut compiler = Compiler::new();
    compiler
        .compile(&program)
        .expect_err("expected a compile error")
}

fn assert_instructions(input: &str, expected: &[Vec<u8>]) {
    let bytecode = compile(input);
    let expected = expected.concat();
    assert_eq!(
        bytecode.instructions,
        expected,
        "wrong instructions for {:?}\nwant:\n{}got:\n{}",
        input,
        disassemble(&expected),
        disassemble(&bytecode.instructions),
    );
}

fn assert_integer_constants(input: &str, expected: &[i64]) {
    let bytecode = compile(input);
    let expected: Vec<Object> = expected.iter().map(|&n| Object::Integer(n)).collect();
    assert_eq!(bytecode.constants, expected, "input: {}", input);
}

fn function_constant(bytecode: &Bytecode, index: usize) -> Vec<u8> {
    match &bytecode.constants[index] {
        Object::CompiledFunction(func) => func.instructions.clone(),
        other => panic!("constant {} is not a function: {:?}", index, other),
    }
}

fn assert_function_instructions(bytecode: &Bytecode, index: usize, expected: &[Vec<u8>]) {
    let actual = function_constant(bytecode, index);
    let expected = expected.concat();
    assert_eq!(
        actual,
        expected,
        "wrong function instructions at constant {}\nwant:\n{}got:\n{}",
        index,
        disassemble(&expected),
        disassemble(&actual),
    );
}

#[test]
fn test_integer_arithmetic() {
    assert_instructions(
        "1 + 2",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Add, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("1 + 2", &[1, 2]);

    assert_instructions(
        "1; 2",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Pop, &[]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Pop, &[]),
        ],
    );

    assert_instructions(
        "1 - 2",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Sub, &[]),
            make(Opcode::Pop, &[]),
        ],
    );

    assert_instructions(
        "1 * 2",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Mul, &[]),
            make(Opcode::Pop, &[]),
        ],
    );

    assert_instructions(
        "2 / 1",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Div, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("2 / 1", &[2, 1]);

    assert_instructions(
        "-1",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Minus, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
}

#[test]
fn test_integer_constants_are_deduplicated() {
    assert_instructions(
        "1 + 1",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Add, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("1 + 1", &[1]);

    let bytecode = compile(r#""mon" + "mon""#);
    assert_eq!(bytecode.constants, vec![Object::string("mon")]);
}

#[test]
fn test_boolean_expressions() {
    assert_instructions("true", &[make(Opcode::True, &[]), make(Opcode::Pop, &[])]);
    assert_instructions("false", &[make(Opcode::False, &[]), make(Opcode::Pop, &[])]);

    assert_instructions(
        "1 > 2",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::GreaterThan, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("1 > 2", &[1, 2]);

    // `<` swaps the operands and compiles to GreaterThan.
    assert_instructions(
        "1 < 2",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::GreaterThan, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("1 < 2", &[2, 1]);

    assert_instructions(
        "1 == 2",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Equal, &[]),
            make(Opcode::Pop, &[]),
        ],
    );

    assert_instructions(
        "true != false",
        &[
            make(Opcode::True, &[]),
            make(Opcode::False, &[]),
            make(Opcode::NotEqual, &[]),
            make(Opcode::Pop, &[]),
        ],
    );

    assert_instructions(
        "!true",
        &[
            make(Opcode::True, &[]),
            make(Opcode::Bang, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
}

#[test]
fn test_conditionals() {
    assert_instructions(
        "if (true) { 10 }; 3333;",
        &[
            // 0000
            make(Opcode::True, &[]),
            // 0001
            make(Opcode::JumpNotTruthy, &[10]),
            // 0004
            make(Opcode::Constant, &[0]),
            // 0007
            make(Opcode::Jump, &[11]),
            // 0010
            make(Opcode::Null, &[]),
            // 0011
            make(Opcode::Pop, &[]),
            // 0012
            make(Opcode::Constant, &[1]),
            // 0015
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("if (true) { 10 }; 3333;", &[10, 3333]);

    assert_instructions(
        "if (true) { 10 } else { 20 }; 3333;",
        &[
            // 0000
            make(Opcode::True, &[]),
            // 0001
            make(Opcode::JumpNotTruthy, &[10]),
            // 0004
            make(Opcode::Constant, &[0]),
            // 0007
            make(Opcode::Jump, &[13]),
            // 0010
            make(Opcode::Constant, &[1]),
            // 0013
            make(Opcode::Pop, &[]),
            // 0014
            make(Opcode::Constant, &[2]),
            // 0017
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("if (true) { 10 } else { 20 }; 3333;", &[10, 20, 3333]);
}

#[test]
fn test_global_let_statements() {
    assert_instructions(
        "let one = 1; let two = 2;",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::SetGlobal, &[1]),
        ],
    );

    assert_instructions(
        "let one = 1; one;",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::Pop, &[]),
        ],
    );

    assert_instructions(
        "let one = 1; let two = one; two;",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::SetGlobal, &[1]),
            make(Opcode::GetGlobal, &[1]),
            make(Opcode::Pop, &[]),
        ],
    );

    // The reference end-to-end shape: constants [1, 2], then load/add/pop.
    assert_instructions(
        "let a = 1; let b = 2; a + b",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::SetGlobal, &[1]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::GetGlobal, &[1]),
            make(Opcode::Add, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("let a = 1; let b = 2; a + b", &[1, 2]);
}

#[test]
fn test_string_expressions() {
    let bytecode = compile(r#""monkey""#);
    assert_eq!(bytecode.constants, vec![Object::string("monkey")]);
    assert_instructions(
        r#""monkey""#,
        &[make(Opcode::Constant, &[0]), make(Opcode::Pop, &[])],
    );

    let bytecode = compile(r#""mon" + "key""#);
    assert_eq!(
        bytecode.constants,
        vec![Object::string("mon"), Object::string("key")]
    );
    assert_instructions(
        r#""mon" + "key""#,
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Add, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
}

#[test]
fn test_array_literals() {
    assert_instructions(
        "[]",
        &[make(Opcode::Array, &[0]), make(Opcode::Pop, &[])],
    );

    assert_instructions(
        "[1, 2, 3]",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Constant, &[2]),
            make(Opcode::Array, &[3]),
            make(Opcode::Pop, &[]),
        ],
    );

    assert_instructions(
        "[1 + 2, 3 - 4, 5 * 6]",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Add, &[]),
            make(Opcode::Constant, &[2]),
            make(Opcode::Constant, &[3]),
            make(Opcode::Sub, &[]),
            make(Opcode::Constant, &[4]),
            make(Opcode::Constant, &[5]),
            make(Opcode::Mul, &[]),
            make(Opcode::Array, &[3]),
            make(Opcode::Pop, &[]),
        ],
    );
}

#[test]
fn test_hash_literals() {
    assert_instructions("{}", &[make(Opcode::Hash, &[0]), make(Opcode::Pop, &[])]);

    assert_instructions(
        "{1: 2, 3: 4, 5: 6}",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Constant, &[2]),
            make(Opcode::Constant, &[3]),
            make(Opcode::Constant, &[4]),
            make(Opcode::Constant, &[5]),
            make(Opcode::Hash, &[6]),
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("{1: 2, 3: 4, 5: 6}", &[1, 2, 3, 4, 5, 6]);

    assert_instructions(
        "{1: 2 + 3, 4: 5 * 6}",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Constant, &[2]),
            make(Opcode::Add, &[]),
            make(Opcode::Constant, &[3]),
            make(Opcode::Constant, &[4]),
            make(Opcode::Constant, &[5]),
            make(Opcode::Mul, &[]),
            make(Opcode::Hash, &[4]),
            make(Opcode::Pop, &[]),
        ],
    );
}

#[test]
fn test_hash_literal_pairs_sort_by_key_source() {
    // Pairs sort on the key's rendered source, so "(1 + 1)" compiles before
    // "(3 + 3)" regardless of source order.
    let reordered = compile("{3 + 3: 4 * 4, 1 + 1: 2 * 2}");
    let in_order = compile("{1 + 1: 2 * 2, 3 + 3: 4 * 4}");
    assert_eq!(reordered.instructions, in_order.instructions);
    assert_eq!(reordered.constants, in_order.constants);
    assert_integer_constants("{3 + 3: 4 * 4, 1 + 1: 2 * 2}", &[1, 2, 3, 4]);
}

#[test]
fn test_index_expressions() {
    assert_instructions(
        "[1, 2, 3][1 + 1]",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Constant, &[2]),
            make(Opcode::Array, &[3]),
            // `1` is already in the pool; both operands reuse constant 0.
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Add, &[]),
            make(Opcode::Index, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
    assert_integer_constants("[1, 2, 3][1 + 1]", &[1, 2, 3]);

    assert_instructions(
        "{1: 2}[2 - 1]",
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Hash, &[2]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Sub, &[]),
            make(Opcode::Index, &[]),
            make(Opcode::Pop, &[]),
        ],
    );
}

#[test]
fn test_functions() {
    let bytecode = compile("fn() { return 5 + 10 }");
    assert_function_instructions(
        &bytecode,
        2,
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Add, &[]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_eq!(
        bytecode.instructions,
        [make(Opcode::Closure, &[2, 0]), make(Opcode::Pop, &[])].concat()
    );

    // An implicit tail expression compiles identically to `return`.
    let implicit = compile("fn() { 5 + 10 }");
    assert_eq!(
        function_constant(&implicit, 2),
        function_constant(&bytecode, 2)
    );

    let two_statements = compile("fn() { 1; 2 }");
    assert_function_instructions(
        &two_statements,
        2,
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::Pop, &[]),
            make(Opcode::Constant, &[1]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
}

#[test]
fn test_functions_without_return_value() {
    let bytecode = compile("fn() { }");
    assert_function_instructions(&bytecode, 0, &[make(Opcode::Return, &[])]);
    assert_eq!(
        bytecode.instructions,
        [make(Opcode::Closure, &[0, 0]), make(Opcode::Pop, &[])].concat()
    );
}

#[test]
fn test_function_calls() {
    assert_instructions(
        "fn() { 24 }();",
        &[
            make(Opcode::Closure, &[1, 0]),
            make(Opcode::Call, &[0]),
            make(Opcode::Pop, &[]),
        ],
    );

    assert_instructions(
        "let noArg = fn() { 24 }; noArg();",
        &[
            make(Opcode::Closure, &[1, 0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::Call, &[0]),
            make(Opcode::Pop, &[]),
        ],
    );

    let one_arg = compile("let oneArg = fn(a) { a }; oneArg(24);");
    assert_function_instructions(
        &one_arg,
        0,
        &[make(Opcode::GetLocal, &[0]), make(Opcode::ReturnValue, &[])],
    );
    assert_eq!(
        one_arg.instructions,
        [
            make(Opcode::Closure, &[0, 0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Call, &[1]),
            make(Opcode::Pop, &[]),
        ]
        .concat()
    );

    let many_args = compile("let manyArg = fn(a, b, c) { a; b; c }; manyArg(24, 25, 26);");
    assert_function_instructions(
        &many_args,
        0,
        &[
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Pop, &[]),
            make(Opcode::GetLocal, &[1]),
            make(Opcode::Pop, &[]),
            make(Opcode::GetLocal, &[2]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_eq!(
        many_args.instructions,
        [
            make(Opcode::Closure, &[0, 0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::Constant, &[2]),
            make(Opcode::Constant, &[3]),
            make(Opcode::Call, &[3]),
            make(Opcode::Pop, &[]),
        ]
        .concat()
    );
}

#[test]
fn test_let_statement_scopes() {
    let global_ref = compile("let num = 55; fn() { num }");
    assert_function_instructions(
        &global_ref,
        1,
        &[make(Opcode::GetGlobal, &[0]), make(Opcode::ReturnValue, &[])],
    );

    let local = compile("fn() { let num = 55; num }");
    assert_function_instructions(
        &local,
        1,
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::SetLocal, &[0]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::ReturnValue, &[]),
        ],
    );

    let two_locals = compile("fn() { let a = 55; let b = 77; a + b }");
    assert_function_instructions(
        &two_locals,
        2,
        &[
            make(Opcode::Constant, &[0]),
            make(Opcode::SetLocal, &[0]),
            make(Opcode::Constant, &[1]),
            make(Opcode::SetLocal, &[1]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::GetLocal, &[1]),
            make(Opcode::Add, &[]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    match &two_locals.constants[2] {
        Object::CompiledFunction(func) => {
            assert_eq!(func.num_locals, 2);
            assert_eq!(func.num_parameters, 0);
        }
        other => panic!("constant 2 is not a function: {:?}", other),
    }
}

#[test]
fn test_builtins() {
    assert_instructions(
        "len([]); push([], 1);",
        &[
            make(Opcode::GetBuiltin, &[0]),
            make(Opcode::Array, &[0]),
            make(Opcode::Call, &[1]),
            make(Opcode::Pop, &[]),
            make(Opcode::GetBuiltin, &[5]),
            make(Opcode::Array, &[0]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Call, &[2]),
            make(Opcode::Pop, &[]),
        ],
    );

    let in_function = compile("fn() { len([]) }");
    assert_function_instructions(
        &in_function,
        0,
        &[
            make(Opcode::GetBuiltin, &[0]),
            make(Opcode::Array, &[0]),
            make(Opcode::Call, &[1]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
}

#[test]
fn test_closures() {
    let bytecode = compile("fn(a) { fn(b) { a + b } }");
    assert_function_instructions(
        &bytecode,
        0,
        &[
            make(Opcode::GetFree, &[0]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Add, &[]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_function_instructions(
        &bytecode,
        1,
        &[
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Closure, &[0, 1]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_eq!(
        bytecode.instructions,
        [make(Opcode::Closure, &[1, 0]), make(Opcode::Pop, &[])].concat()
    );

    let nested = compile("fn(a) { fn(b) { fn(c) { a + b + c } } }");
    assert_function_instructions(
        &nested,
        0,
        &[
            make(Opcode::GetFree, &[0]),
            make(Opcode::GetFree, &[1]),
            make(Opcode::Add, &[]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Add, &[]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_function_instructions(
        &nested,
        1,
        &[
            make(Opcode::GetFree, &[0]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Closure, &[0, 2]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_function_instructions(
        &nested,
        2,
        &[
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Closure, &[1, 1]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
}

#[test]
fn test_closures_over_globals_and_locals() {
    let input = "
        let global = 55;
        fn() {
            let a = 66;
            fn() {
                let b = 77;
                fn() {
                    let c = 88;
                    global + a + b + c;
                }
            }
        }
    ";
    let bytecode = compile(input);
    assert_function_instructions(
        &bytecode,
        4,
        &[
            make(Opcode::Constant, &[3]),
            make(Opcode::SetLocal, &[0]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::GetFree, &[0]),
            make(Opcode::Add, &[]),
            make(Opcode::GetFree, &[1]),
            make(Opcode::Add, &[]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Add, &[]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_function_instructions(
        &bytecode,
        5,
        &[
            make(Opcode::Constant, &[2]),
            make(Opcode::SetLocal, &[0]),
            make(Opcode::GetFree, &[0]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Closure, &[4, 2]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_function_instructions(
        &bytecode,
        6,
        &[
            make(Opcode::Constant, &[1]),
            make(Opcode::SetLocal, &[0]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Closure, &[5, 1]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_eq!(
        bytecode.instructions,
        [
            make(Opcode::Constant, &[0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::Closure, &[6, 0]),
            make(Opcode::Pop, &[]),
        ]
        .concat()
    );
}

#[test]
fn test_recursive_functions_use_current_closure() {
    let bytecode = compile("let countDown = fn(x) { countDown(x - 1); }; countDown(1);");
    assert_function_instructions(
        &bytecode,
        1,
        &[
            make(Opcode::CurrentClosure, &[]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Sub, &[]),
            make(Opcode::Call, &[1]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_eq!(
        bytecode.instructions,
        [
            make(Opcode::Closure, &[1, 0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Call, &[1]),
            make(Opcode::Pop, &[]),
        ]
        .concat()
    );

    let wrapped = compile(
        "let wrapper = fn() { let countDown = fn(x) { countDown(x - 1); }; countDown(1); }; wrapper();",
    );
    assert_function_instructions(
        &wrapped,
        1,
        &[
            make(Opcode::CurrentClosure, &[]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Sub, &[]),
            make(Opcode::Call, &[1]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_function_instructions(
        &wrapped,
        2,
        &[
            make(Opcode::Closure, &[1, 0]),
            make(Opcode::SetLocal, &[0]),
            make(Opcode::GetLocal, &[0]),
            make(Opcode::Constant, &[0]),
            make(Opcode::Call, &[1]),
            make(Opcode::ReturnValue, &[]),
        ],
    );
    assert_eq!(
        wrapped.instructions,
        [
            make(Opcode::Closure, &[2, 0]),
            make(Opcode::SetGlobal, &[0]),
            make(Opcode::GetGlobal, &[0]),
            make(Opcode::Call, &[0]),
            make(Opcode::Pop, &[]),
        ]
        .concat()
    );
}

#[test]
fn test_compile_errors() {
    assert_eq!(
        compile_err("foobar"),
        CompileError::UndefinedVariable("foobar".to_string())
    );
    assert_eq!(
        compile_err("foobar").to_string(),
        "undefined variable foobar"
    );
    assert_eq!(
        compile_err("fn() { undefinedInsideFunction }"),
        CompileError::UndefinedVariable("undefinedInsideFunction".to_string())
    );
}

#[test]
fn test_constant_pools_are_position_stable() {
    let input = "let f = fn(x) { x + 1 }; f(1) + f(2)";
    let first = compile(input);
    let second = compile(input);
    assert_eq!(first.instructions, second.instructions);
    assert_eq!(first.constants.len(), second.constants.len());
    assert_eq!(
        disassemble(&first.instructions),
        disassemble(&second.instructions)
    );
}
