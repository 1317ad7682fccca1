// monkey - Benchmark harness comparing the two engines
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runs the recursive-fibonacci benchmark under the engine selected by
//! `-engine=vm|eval` and reports the result and wall-clock duration.

use std::env;
use std::process;
use std::time::Instant;

use monkey_core::{eval_program, Env};
use monkey_vm::{Compiler, VM};

const INPUT: &str = "
    let fib = fn(x) {
        if (x == 0) {
            return 0;
        } else {
            if (x == 1) {
                return 1;
            } else {
                fib(x - 1) + fib(x - 2)
            }
        }
    };
    fib(35)
";

fn main() {
    let engine = env::args()
        .skip(1)
        .find_map(|arg| {
            arg.strip_prefix("--engine=")
                .or_else(|| arg.strip_prefix("-engine="))
                .map(str::to_string)
        })
        .unwrap_or_else(|| "vm".to_string());

    let program = match monkey_parser::parse(INPUT) {
        Ok(program) => program,
        Err(errors) => {
            eprintln!("parse errors: {:?}", errors);
            process::exit(1);
        }
    };

    let (result, duration) = match engine.as_str() {
        "vm" => {
            let mut compiler = Compiler::new();
            if let Err(err) = compiler.compile(&program) {
                eprintln!("compiler error: {}", err);
                process::exit(1);
            }
            let mut machine = VM::new(compiler.bytecode());

            let start = Instant::now();
            if let Err(err) = machine.run() {
                eprintln!("vm error: {}", err);
                process::exit(1);
            }
            let duration = start.elapsed();
            (machine.last_popped_stack_elem().clone(), duration)
        }
        "eval" => {
            let env = Env::new();
            let start = Instant::now();
            let result = eval_program(&program, &env);
            (result, start.elapsed())
        }
        other => {
            eprintln!("unknown engine {:?}: use 'vm' or 'eval'", other);
            process::exit(1);
        }
    };

    println!(
        "engine={}, result={}, duration={:?}",
        engine, result, duration
    );
}
