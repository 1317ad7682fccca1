// monkey-vm - Bytecode compiler and virtual machine for the Monkey programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime errors for the VM.
//!
//! These halt execution and surface to the caller of [`crate::vm::VM::run`].
//! Built-in type/arity failures are *not* runtime errors; they land on the
//! stack as `Object::Error` values.

use std::fmt;

use crate::code::Opcode;

/// Runtime error during VM execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Push with a full operand stack.
    StackOverflow,
    /// Call with a full frame stack.
    FrameOverflow,
    /// Binary operation on an unsupported type pairing.
    UnsupportedBinaryTypes {
        left: &'static str,
        right: &'static str,
    },
    /// A string operation other than concatenation.
    UnknownStringOperator(Opcode),
    /// An integer operation the dispatcher has no rule for.
    UnknownIntegerOperator(Opcode),
    /// Ordering comparison on non-integers.
    UnsupportedComparison,
    /// Unary minus on a non-integer.
    UnsupportedNegation { type_name: &'static str },
    /// Integer division by zero.
    DivisionByZero,
    /// Indexing into a value that is not an array or hash.
    IndexNotSupported { type_name: &'static str },
    /// Hash key (literal or lookup) that is not a hashable variant.
    UnusableHashKey { type_name: &'static str },
    /// Call of a value that is neither a closure nor a built-in.
    CallingNonCallable,
    /// Call with the wrong number of arguments.
    WrongNumberOfArguments { want: usize, got: usize },
    /// `Closure` operand pointing at a non-function constant.
    NotAFunction { type_name: &'static str },
    /// A byte that decodes to no opcode.
    InvalidOpcode(u8),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::StackOverflow => write!(f, "stack overflow"),
            RuntimeError::FrameOverflow => write!(f, "frame overflow"),
            RuntimeError::UnsupportedBinaryTypes { left, right } => {
                write!(f, "unsupported types for binary operation: {} {}", left, right)
            }
            RuntimeError::UnknownStringOperator(op) => {
                write!(f, "unknown string operator: {}", op)
            }
            RuntimeError::UnknownIntegerOperator(op) => {
                write!(f, "unknown integer operator: {}", op)
            }
            RuntimeError::UnsupportedComparison => {
                write!(f, "unsupported types for comparison")
            }
            RuntimeError::UnsupportedNegation { type_name } => {
                write!(f, "unsupported type for negation: {}", type_name)
            }
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {}", type_name)
            }
            RuntimeError::UnusableHashKey { type_name } => {
                write!(f, "unusable as hash key: {}", type_name)
            }
            RuntimeError::CallingNonCallable => {
                write!(f, "calling non-closure and non-builtin")
            }
            RuntimeError::WrongNumberOfArguments { want, got } => {
                write!(f, "wrong number of arguments: want={}, got={}", want, got)
            }
            RuntimeError::NotAFunction { type_name } => {
                write!(f, "not a function: {}", type_name)
            }
            RuntimeError::InvalidOpcode(byte) => write!(f, "invalid opcode: {}", byte),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Result type for VM operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
