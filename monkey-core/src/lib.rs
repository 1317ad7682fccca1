// monkey-core - Value model, built-ins, and evaluator for the Monkey programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core runtime for the Monkey programming language.
//!
//! This crate owns the value model ([`object::Object`]), the built-in
//! function registry, and the AST-walking evaluator. The bytecode engine in
//! `monkey-vm` shares the same values and built-ins, so both engines agree on
//! every observable result.

pub mod builtins;
pub mod env;
pub mod eval;
pub mod object;

pub use builtins::BUILTINS;
pub use env::Env;
pub use eval::eval_program;
pub use object::{
    BuiltinDef, Closure, CompiledFunction, Function, HashKey, HashKeyTag, HashPair, Object,
};
