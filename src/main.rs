// monkey - The Monkey programming language, two engines over one front end
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! REPL for Monkey. `-engine=vm` (the default) compiles each line to
//! bytecode and runs it on the VM, threading the symbol table, constant
//! pool, and globals store across lines; `-engine=eval` walks the AST
//! against a persistent environment. Results print with their wall-clock
//! execution time.

use std::env;
use std::io::{self, Write};
use std::time::Instant;

use monkey_core::{eval_program, Env, Object, BUILTINS};
use monkey_parser::{Lexer, Parser};
use monkey_vm::{Compiler, SymbolTable, GLOBALS_SIZE, VM};

const PROMPT: &str = ">> ";

fn main() {
    let engine = parse_engine_flag();

    let user = env::var("USER").unwrap_or_else(|_| "there".to_string());
    println!("Hello {}! This is the Monkey programming language!", user);
    println!("Feel free to type in commands");

    match engine.as_str() {
        "vm" => run_vm_repl(),
        "eval" => run_eval_repl(),
        _ => println!("Please specify a valid evaluation engine"),
    }
}

/// Parse `-engine=vm|eval` from the command line; defaults to `vm`.
fn parse_engine_flag() -> String {
    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--engine=") {
            return value.to_string();
        }
        if let Some(value) = arg.strip_prefix("-engine=") {
            return value.to_string();
        }
    }
    "vm".to_string()
}

fn read_line() -> Option<String> {
    print!("{}", PROMPT);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!();
            None
        }
        Ok(_) => Some(line),
    }
}

fn print_parse_errors(errors: &[String]) {
    for msg in errors {
        println!("\t{}", msg);
    }
}

fn run_vm_repl() {
    println!("Running engine=vm");

    let mut symbol_table = SymbolTable::new();
    for (index, builtin) in BUILTINS.iter().enumerate() {
        symbol_table.define_builtin(index, builtin.name);
    }
    let mut constants: Vec<Object> = Vec::new();
    let mut globals = vec![Object::Null; GLOBALS_SIZE];

    while let Some(line) = read_line() {
        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();
        if !parser.errors().is_empty() {
            print_parse_errors(parser.errors());
            continue;
        }

        let mut compiler = Compiler::new_with_state(symbol_table, constants);
        let compiled = compiler.compile(&program);
        let bytecode = compiler.bytecode();
        (symbol_table, constants) = compiler.into_state();
        if let Err(err) = compiled {
            println!("Whoops! Compilation failed:\n{}", err);
            continue;
        }

        let mut machine = VM::new_with_globals_store(bytecode, globals);
        let start = Instant::now();
        let outcome = machine.run();
        let duration = start.elapsed();
        let result = machine.last_popped_stack_elem().clone();
        globals = machine.into_globals();

        match outcome {
            Ok(()) => println!("{}\t\t{:?}", result, duration),
            Err(err) => println!("Whoops! Executing bytecode failed:\n{}", err),
        }
    }
}

fn run_eval_repl() {
    println!("Running engine=eval");

    let env = Env::new();
    while let Some(line) = read_line() {
        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();
        if !parser.errors().is_empty() {
            print_parse_errors(parser.errors());
            continue;
        }

        let start = Instant::now();
        let result = eval_program(&program, &env);
        let duration = start.elapsed();
        println!("{}\t\t{:?}", result, duration);
    }
}
