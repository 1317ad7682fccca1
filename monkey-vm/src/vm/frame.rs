// monkey-vm - Bytecode compiler and virtual machine for the Monkey programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Call frames for the VM.

use std::rc::Rc;

use monkey_core::object::Closure;

/// A call frame on the VM's frame stack.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The closure being executed. The main program runs inside a synthetic
    /// closure wrapping the top-level instructions.
    pub closure: Rc<Closure>,

    /// Instruction pointer. Starts at -1 so the pre-increment dispatch reads
    /// byte 0 first.
    pub ip: isize,

    /// Operand-stack index where this frame's locals begin.
    pub base_pointer: usize,
}

impl Frame {
    /// Create a frame for a closure whose arguments start at `base_pointer`.
    pub fn new(closure: Rc<Closure>, base_pointer: usize) -> Self {
        Frame {
            closure,
            ip: -1,
            base_pointer,
        }
    }

    /// The instruction bytes this frame executes.
    #[inline]
    pub fn instructions(&self) -> &[u8] {
        &self.closure.func.instructions
    }
}
