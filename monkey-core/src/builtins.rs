// monkey-core - Built-in functions for Monkey
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The built-in functions shared by both engines.
//!
//! `BUILTINS` is ordered: the compiler emits `GetBuiltin` operands as indexes
//! into this table, so reordering it changes compiled programs. Failures are
//! reported as `Object::Error` values on the Monkey side, never as host
//! errors.

use crate::object::{BuiltinDef, Object};

/// The built-in registry, in `GetBuiltin` index order.
pub const BUILTINS: &[BuiltinDef] = &[
    BuiltinDef {
        name: "len",
        func: builtin_len,
    },
    BuiltinDef {
        name: "puts",
        func: builtin_puts,
    },
    BuiltinDef {
        name: "first",
        func: builtin_first,
    },
    BuiltinDef {
        name: "last",
        func: builtin_last,
    },
    BuiltinDef {
        name: "rest",
        func: builtin_rest,
    },
    BuiltinDef {
        name: "push",
        func: builtin_push,
    },
];

/// Look up a built-in by name (used by the evaluator; the VM indexes).
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

fn new_error(message: String) -> Option<Object> {
    Some(Object::error(message))
}

/// (len x) - byte length of a string, element count of an array.
fn builtin_len(args: &[Object]) -> Option<Object> {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Object::String(s) => Some(Object::Integer(s.len() as i64)),
        Object::Array(elements) => Some(Object::Integer(elements.len() as i64)),
        other => new_error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

/// (puts x...) - print each argument's inspect form on its own line.
fn builtin_puts(args: &[Object]) -> Option<Object> {
    for arg in args {
        println!("{}", arg);
    }
    None
}

/// (first xs) - first element of an array, or null when empty.
fn builtin_first(args: &[Object]) -> Option<Object> {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Object::Array(elements) => Some(elements.front().cloned().unwrap_or(Object::Null)),
        other => new_error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// (last xs) - last element of an array, or null when empty.
fn builtin_last(args: &[Object]) -> Option<Object> {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Object::Array(elements) => Some(elements.back().cloned().unwrap_or(Object::Null)),
        other => new_error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// (rest xs) - a new array of all but the first element, or null when empty.
fn builtin_rest(args: &[Object]) -> Option<Object> {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                return Some(Object::Null);
            }
            let mut rest = elements.clone();
            rest.pop_front();
            Some(Object::Array(rest))
        }
        other => new_error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// (push xs x) - a new array with the value appended. Never mutates.
fn builtin_push(args: &[Object]) -> Option<Object> {
    if args.len() != 2 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=2",
            args.len()
        ));
    }
    match &args[0] {
        Object::Array(elements) => {
            let mut pushed = elements.clone();
            pushed.push_back(args[1].clone());
            Some(Object::Array(pushed))
        }
        other => new_error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
