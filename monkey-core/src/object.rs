// monkey-core - Value types for Monkey
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Monkey.
//!
//! `Object` is the central enum representing every runtime value. It is
//! shared by both execution engines: the AST-walking evaluator holds
//! `Function` values (an AST body plus its captured environment), while the
//! compiler and VM traffic in `CompiledFunction` and `Closure` values.
//!
//! Arrays and hashes are persistent containers: the language never mutates
//! them (the only "mutating" built-in, `push`, returns a new array), so
//! cloning an `Object` is always cheap.

use std::fmt;
use std::hash::Hasher;
use std::rc::Rc;

use fnv::FnvHasher;
use im::{HashMap, Vector};

use monkey_parser::ast::{BlockStatement, Identifier};

use crate::env::Env;

/// A Monkey runtime value.
#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    String(Rc<str>),
    Array(Vector<Object>),
    Hash(HashMap<HashKey, HashPair>),
    /// An evaluator closure: AST body plus captured environment.
    Function(Rc<Function>),
    /// Compiled bytecode for a function literal, stored in the constant pool.
    CompiledFunction(Rc<CompiledFunction>),
    /// A compiled function plus its captured free values.
    Closure(Rc<Closure>),
    Builtin(&'static BuiltinDef),
    /// Wrapper carrying a `return` value out of a block (evaluator-internal;
    /// the VM never constructs or observes it).
    ReturnValue(Rc<Object>),
    Error(Rc<str>),
}

impl Object {
    /// Build a string value.
    pub fn string(s: impl AsRef<str>) -> Object {
        Object::String(Rc::from(s.as_ref()))
    }

    /// Build an error value from a rendered message.
    pub fn error(message: impl fmt::Display) -> Object {
        Object::Error(Rc::from(message.to_string()))
    }

    /// The uppercase type tag used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::String(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::CompiledFunction(_) => "COMPILED_FUNCTION",
            Object::Closure(_) => "CLOSURE",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }

    /// Everything is truthy except `false` and `null`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    /// Whether this value is an error value.
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// The hash key for this value, if it is a hashable variant.
    /// `None` means "unusable as hash key".
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(n) => Some(HashKey {
                tag: HashKeyTag::Integer,
                value: *n as u64,
            }),
            Object::Boolean(b) => Some(HashKey {
                tag: HashKeyTag::Boolean,
                value: u64::from(*b),
            }),
            Object::String(s) => {
                let mut hasher = FnvHasher::default();
                hasher.write(s.as_bytes());
                Some(HashKey {
                    tag: HashKeyTag::String,
                    value: hasher.finish(),
                })
            }
            _ => None,
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => a == b,
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::CompiledFunction(a), Object::CompiledFunction(b)) => Rc::ptr_eq(a, b),
            (Object::Closure(a), Object::Closure(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => std::ptr::eq(*a, *b),
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Object {
    /// The inspect form, as printed by `puts` and the REPL.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{}", n),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Null => write!(f, "null"),
            Object::String(s) => write!(f, "{}", s),
            Object::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Object::Hash(pairs) => {
                let rendered: Vec<String> = pairs
                    .values()
                    .map(|pair| format!("{}: {}", pair.key, pair.value))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Object::Function(func) => {
                let params: Vec<String> = func.parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), func.body)
            }
            Object::CompiledFunction(func) => {
                write!(f, "CompiledFunction[{:p}]", Rc::as_ptr(func))
            }
            Object::Closure(closure) => write!(f, "Closure[{:p}]", Rc::as_ptr(closure)),
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::ReturnValue(value) => write!(f, "{}", value),
            Object::Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}

/// Which hashable variant a `HashKey` came from. Keys of different variants
/// never collide even when their digests match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKeyTag {
    Integer,
    Boolean,
    String,
}

/// A hash-map key: variant tag plus 64-bit digest.
///
/// Integers hash as their value reinterpreted unsigned, booleans as 0/1,
/// strings as the FNV-1a digest of their bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub tag: HashKeyTag,
    pub value: u64,
}

/// A key/value entry in a hash. The original key value is kept so hashes can
/// be inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// An evaluator function value: parameter list, body, and the environment it
/// closed over.
#[derive(Clone)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Env,
}

// The captured environment can contain the function itself (recursive
// bindings), so Debug must not descend into it.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(f, "Function(fn({}))", params.join(", "))
    }
}

/// The compiled form of a function literal: its instruction bytes plus the
/// stack-frame dimensions the VM needs to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFunction {
    pub instructions: Vec<u8>,
    pub num_locals: usize,
    pub num_parameters: usize,
}

/// A compiled function plus the free values captured when the closure was
/// created. `free` is fixed at creation time; Monkey closures capture values,
/// not variables.
#[derive(Debug, Clone)]
pub struct Closure {
    pub func: Rc<CompiledFunction>,
    pub free: Vec<Object>,
}

/// A built-in function: name plus native implementation.
///
/// Returning `None` means "no value"; callers substitute `Null`. Type and
/// arity failures are reported as `Object::Error` values, not host errors.
pub struct BuiltinDef {
    pub name: &'static str,
    pub func: fn(&[Object]) -> Option<Object>,
}

impl fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinDef({})", self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================
