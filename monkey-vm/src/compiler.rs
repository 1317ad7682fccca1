// monkey-vm - Bytecode compiler and virtual machine for the Monkey programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Code generation: transforms the AST to bytecode.
//!
//! The compiler keeps a stack of compilation scopes, one per function literal
//! being compiled, each owning an instruction buffer and a record of the last
//! two emitted instructions for the peephole fixups (`if` expressions drop a
//! trailing `Pop`; function bodies rewrite it to `ReturnValue`). Jumps are
//! emitted with a placeholder operand and patched once the target offset is
//! known.

use std::fmt;
use std::rc::Rc;

use monkey_core::builtins::BUILTINS;
use monkey_core::object::{CompiledFunction, Object};
use monkey_parser::ast::{BlockStatement, Expression, Program, Statement};

use crate::code::{self, Instructions, Opcode};
use crate::symbol_table::{Symbol, SymbolScope, SymbolTable};

/// Error during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Reference to a name with no binding in scope.
    UndefinedVariable(String),
    /// Prefix or infix operator the compiler has no opcode for.
    UnknownOperator(String),
    /// Constant pool overflow (indexes are 16-bit).
    TooManyConstants,
    /// Local slot overflow (indexes are 8-bit).
    TooManyLocals,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UndefinedVariable(name) => write!(f, "undefined variable {}", name),
            CompileError::UnknownOperator(op) => write!(f, "unknown operator: {}", op),
            CompileError::TooManyConstants => write!(f, "too many constants"),
            CompileError::TooManyLocals => write!(f, "too many local variables"),
        }
    }
}

impl std::error::Error for CompileError {}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;

/// The compiler's output: a flat instruction buffer plus the constant pool.
#[derive(Debug, Clone)]
pub struct Bytecode {
    pub instructions: Instructions,
    pub constants: Vec<Object>,
}

/// Opcode and position of an emitted instruction, for peephole fixups.
#[derive(Debug, Clone, Copy)]
struct EmittedInstruction {
    opcode: Opcode,
    position: usize,
}

/// Per-function compilation state.
#[derive(Debug, Default)]
struct CompilationScope {
    instructions: Instructions,
    last_instruction: Option<EmittedInstruction>,
    previous_instruction: Option<EmittedInstruction>,
}

/// The bytecode compiler.
pub struct Compiler {
    constants: Vec<Object>,
    symbol_table: SymbolTable,
    scopes: Vec<CompilationScope>,
}

impl Compiler {
    /// Create a compiler with a fresh symbol table; built-ins are
    /// pre-registered so `len`, `puts`, … resolve from any scope.
    pub fn new() -> Self {
        let mut symbol_table = SymbolTable::new();
        for (index, builtin) in BUILTINS.iter().enumerate() {
            symbol_table.define_builtin(index, builtin.name);
        }
        Self::new_with_state(symbol_table, Vec::new())
    }

    /// Create a compiler threading existing REPL state: the symbol table and
    /// constant pool of previous inputs.
    pub fn new_with_state(symbol_table: SymbolTable, constants: Vec<Object>) -> Self {
        Compiler {
            constants,
            symbol_table,
            scopes: vec![CompilationScope::default()],
        }
    }

    /// Compile a program into the current scope.
    pub fn compile(&mut self, program: &Program) -> Result<()> {
        for stmt in &program.statements {
            self.compile_statement(stmt)?;
        }
        Ok(())
    }

    /// The compiled output. The compiler can keep compiling afterwards (the
    /// REPL does).
    pub fn bytecode(&self) -> Bytecode {
        Bytecode {
            instructions: self.current_scope().instructions.clone(),
            constants: self.constants.clone(),
        }
    }

    /// Tear down the compiler, yielding the state a REPL threads into the
    /// next input's `new_with_state`.
    pub fn into_state(self) -> (SymbolTable, Vec<Object>) {
        (self.symbol_table, self.constants)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn compile_statement(&mut self, stmt: &Statement) -> Result<()> {
        match stmt {
            Statement::Expression(expr) => {
                self.compile_expression(expr)?;
                self.emit(Opcode::Pop, &[]);
            }
            Statement::Let { name, value } => {
                // Define before compiling the value so a function literal
                // bound to this name can reference itself.
                let symbol = self.symbol_table.define(&name.name);
                self.compile_expression(value)?;
                match symbol.scope {
                    SymbolScope::Global => {
                        self.emit(Opcode::SetGlobal, &[symbol.index]);
                    }
                    _ => {
                        if symbol.index > u8::MAX as usize {
                            return Err(CompileError::TooManyLocals);
                        }
                        self.emit(Opcode::SetLocal, &[symbol.index]);
                    }
                }
            }
            Statement::Return(value) => {
                self.compile_expression(value)?;
                self.emit(Opcode::ReturnValue, &[]);
            }
        }
        Ok(())
    }

    fn compile_block_statement(&mut self, block: &BlockStatement) -> Result<()> {
        for stmt in &block.statements {
            self.compile_statement(stmt)?;
        }
        Ok(())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn compile_expression(&mut self, expr: &Expression) -> Result<()> {
        match expr {
            Expression::IntegerLiteral(n) => {
                let idx = self.add_constant(Object::Integer(*n))?;
                self.emit(Opcode::Constant, &[idx]);
            }
            Expression::BooleanLiteral(true) => {
                self.emit(Opcode::True, &[]);
            }
            Expression::BooleanLiteral(false) => {
                self.emit(Opcode::False, &[]);
            }
            Expression::StringLiteral(s) => {
                let idx = self.add_constant(Object::string(s))?;
                self.emit(Opcode::Constant, &[idx]);
            }

            Expression::Identifier(ident) => {
                let symbol = self
                    .symbol_table
                    .resolve(&ident.name)
                    .ok_or_else(|| CompileError::UndefinedVariable(ident.name.clone()))?;
                self.load_symbol(&symbol);
            }

            Expression::Prefix { operator, right } => {
                self.compile_expression(right)?;
                match operator.as_str() {
                    "!" => self.emit(Opcode::Bang, &[]),
                    "-" => self.emit(Opcode::Minus, &[]),
                    _ => return Err(CompileError::UnknownOperator(operator.clone())),
                };
            }

            Expression::Infix {
                operator,
                left,
                right,
            } => {
                // `<` is `>` with the operands swapped.
                if operator == "<" {
                    self.compile_expression(right)?;
                    self.compile_expression(left)?;
                    self.emit(Opcode::GreaterThan, &[]);
                    return Ok(());
                }
                self.compile_expression(left)?;
                self.compile_expression(right)?;
                match operator.as_str() {
                    "+" => self.emit(Opcode::Add, &[]),
                    "-" => self.emit(Opcode::Sub, &[]),
                    "*" => self.emit(Opcode::Mul, &[]),
                    "/" => self.emit(Opcode::Div, &[]),
                    ">" => self.emit(Opcode::GreaterThan, &[]),
                    "==" => self.emit(Opcode::Equal, &[]),
                    "!=" => self.emit(Opcode::NotEqual, &[]),
                    _ => return Err(CompileError::UnknownOperator(operator.clone())),
                };
            }

            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                self.compile_expression(condition)?;

                // Placeholder operand, patched once the consequence is known.
                let jump_not_truthy_pos = self.emit(Opcode::JumpNotTruthy, &[9999]);

                self.compile_block_statement(consequence)?;
                // An `if` is an expression: the branch must leave its value
                // on the stack, so the statement-level Pop goes.
                if self.last_instruction_is(Opcode::Pop) {
                    self.remove_last_pop();
                }

                let jump_pos = self.emit(Opcode::Jump, &[9999]);

                let after_consequence = self.current_scope().instructions.len();
                self.change_operand(jump_not_truthy_pos, after_consequence);

                match alternative {
                    None => {
                        // A missing alternative still produces a value.
                        self.emit(Opcode::Null, &[]);
                    }
                    Some(alternative) => {
                        self.compile_block_statement(alternative)?;
                        if self.last_instruction_is(Opcode::Pop) {
                            self.remove_last_pop();
                        }
                    }
                }

                let after_alternative = self.current_scope().instructions.len();
                self.change_operand(jump_pos, after_alternative);
            }

            Expression::FunctionLiteral {
                parameters,
                body,
                name,
            } => {
                self.enter_scope();

                if !name.is_empty() {
                    self.symbol_table.define_function_name(name);
                }
                for param in parameters {
                    self.symbol_table.define(&param.name);
                }

                self.compile_block_statement(body)?;

                // An expression-statement tail becomes the return value; a
                // body with no tail value returns Null.
                if self.last_instruction_is(Opcode::Pop) {
                    self.replace_last_pop_with_return();
                }
                if !self.last_instruction_is(Opcode::ReturnValue) {
                    self.emit(Opcode::Return, &[]);
                }

                let (instructions, scope) = self.leave_scope();
                if scope.num_definitions > u8::MAX as usize + 1 {
                    return Err(CompileError::TooManyLocals);
                }

                // Load each captured value in the enclosing scope, in the
                // order the free symbols were registered; `Closure` pops them
                // into the closure's free vector.
                for symbol in &scope.free_symbols {
                    self.load_symbol(symbol);
                }

                let func = CompiledFunction {
                    instructions,
                    num_locals: scope.num_definitions,
                    num_parameters: parameters.len(),
                };
                let idx = self.add_constant(Object::CompiledFunction(Rc::new(func)))?;
                self.emit(Opcode::Closure, &[idx, scope.free_symbols.len()]);
            }

            Expression::Call {
                function,
                arguments,
            } => {
                self.compile_expression(function)?;
                for arg in arguments {
                    self.compile_expression(arg)?;
                }
                self.emit(Opcode::Call, &[arguments.len()]);
            }

            Expression::Array(elements) => {
                for element in elements {
                    self.compile_expression(element)?;
                }
                self.emit(Opcode::Array, &[elements.len()]);
            }

            Expression::Hash(pairs) => {
                // Sort by the key's source rendering so compiled output is a
                // pure function of the AST.
                let mut sorted: Vec<&(Expression, Expression)> = pairs.iter().collect();
                sorted.sort_by_key(|(key, _)| key.to_string());
                for (key, value) in sorted {
                    self.compile_expression(key)?;
                    self.compile_expression(value)?;
                }
                self.emit(Opcode::Hash, &[pairs.len() * 2]);
            }

            Expression::Index { left, index } => {
                self.compile_expression(left)?;
                self.compile_expression(index)?;
                self.emit(Opcode::Index, &[]);
            }
        }
        Ok(())
    }

    fn load_symbol(&mut self, symbol: &Symbol) {
        match symbol.scope {
            SymbolScope::Global => self.emit(Opcode::GetGlobal, &[symbol.index]),
            SymbolScope::Local => self.emit(Opcode::GetLocal, &[symbol.index]),
            SymbolScope::Builtin => self.emit(Opcode::GetBuiltin, &[symbol.index]),
            SymbolScope::Free => self.emit(Opcode::GetFree, &[symbol.index]),
            SymbolScope::Function => self.emit(Opcode::CurrentClosure, &[]),
        };
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    fn enter_scope(&mut self) {
        self.scopes.push(CompilationScope::default());
        self.symbol_table.enter_scope();
    }

    fn leave_scope(&mut self) -> (Instructions, crate::symbol_table::Scope) {
        let compilation_scope = self
            .scopes
            .pop()
            .expect("compilation scopes are push/pop balanced");
        let symbol_scope = self.symbol_table.leave_scope();
        (compilation_scope.instructions, symbol_scope)
    }

    fn current_scope(&self) -> &CompilationScope {
        self.scopes.last().expect("compiler always has a scope")
    }

    fn current_scope_mut(&mut self) -> &mut CompilationScope {
        self.scopes.last_mut().expect("compiler always has a scope")
    }

    // ========================================================================
    // Emission
    // ========================================================================

    /// Add a constant to the pool, returning its index. Integers and strings
    /// are deduplicated by value; compiled functions never are.
    fn add_constant(&mut self, obj: Object) -> Result<usize> {
        for (i, existing) in self.constants.iter().enumerate() {
            if constants_equal(existing, &obj) {
                return Ok(i);
            }
        }
        if self.constants.len() > u16::MAX as usize {
            return Err(CompileError::TooManyConstants);
        }
        self.constants.push(obj);
        Ok(self.constants.len() - 1)
    }

    /// Emit an instruction into the current scope, returning its position.
    fn emit(&mut self, op: Opcode, operands: &[usize]) -> usize {
        let instruction = code::make(op, operands);
        let position = self.add_instruction(instruction);
        self.set_last_instruction(op, position);
        position
    }

    fn add_instruction(&mut self, instruction: Vec<u8>) -> usize {
        let scope = self.current_scope_mut();
        let position = scope.instructions.len();
        scope.instructions.extend(instruction);
        position
    }

    fn set_last_instruction(&mut self, opcode: Opcode, position: usize) {
        let scope = self.current_scope_mut();
        scope.previous_instruction = scope.last_instruction;
        scope.last_instruction = Some(EmittedInstruction { opcode, position });
    }

    fn last_instruction_is(&self, opcode: Opcode) -> bool {
        self.current_scope()
            .last_instruction
            .is_some_and(|ins| ins.opcode == opcode)
    }

    fn remove_last_pop(&mut self) {
        let scope = self.current_scope_mut();
        if let Some(last) = scope.last_instruction {
            scope.instructions.truncate(last.position);
            scope.last_instruction = scope.previous_instruction;
            scope.previous_instruction = None;
        }
    }

    /// Overwrite the instruction at `position` in place. Only valid when the
    /// replacement has the same width.
    fn replace_instruction(&mut self, position: usize, new_instruction: &[u8]) {
        let scope = self.current_scope_mut();
        scope.instructions[position..position + new_instruction.len()]
            .copy_from_slice(new_instruction);
    }

    /// Re-encode the operand of the (jump) instruction at `position`.
    fn change_operand(&mut self, position: usize, operand: usize) {
        let byte = self.current_scope().instructions[position];
        match Opcode::try_from(byte) {
            Ok(op) => self.replace_instruction(position, &code::make(op, &[operand])),
            Err(_) => debug_assert!(false, "change_operand at non-opcode position {}", position),
        }
    }

    fn replace_last_pop_with_return(&mut self) {
        if let Some(last) = self.current_scope().last_instruction {
            self.replace_instruction(last.position, &code::make(Opcode::ReturnValue, &[]));
            self.current_scope_mut().last_instruction = Some(EmittedInstruction {
                opcode: Opcode::ReturnValue,
                position: last.position,
            });
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Constant-pool deduplication: structural for integers and strings only.
fn constants_equal(a: &Object, b: &Object) -> bool {
    match (a, b) {
        (Object::Integer(a), Object::Integer(b)) => a == b,
        (Object::String(a), Object::String(b)) => a == b,
        _ => false,
    }
}
