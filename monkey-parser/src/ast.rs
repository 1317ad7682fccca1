// monkey-parser - AST for Monkey
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Abstract syntax tree produced by the parser.
//!
//! Every node implements `Display`, rendering it back to (normalised) source
//! text. The compiler relies on this to sort hash-literal pairs
//! deterministically, and the parser tests assert on rendered programs.

use std::fmt;

/// A complete parsed program: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: Identifier, value: Expression },
    /// `return <value>;`
    Return(Expression),
    /// A bare expression used as a statement.
    Expression(Expression),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return(value) => write!(f, "return {};", value),
            Statement::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

/// A `{ ... }` block of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// An identifier reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    BooleanLiteral(bool),
    StringLiteral(String),
    /// `<op><right>`, e.g. `-x` or `!ok`
    Prefix {
        operator: String,
        right: Box<Expression>,
    },
    /// `<left> <op> <right>`
    Infix {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// `fn(<params>) { ... }`; `name` is filled in when the literal is bound
    /// by a `let`, enabling self-referential compilation.
    FunctionLiteral {
        parameters: Vec<Identifier>,
        body: BlockStatement,
        name: String,
    },
    /// `<function>(<arguments>)`
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// `[<elements>]`
    Array(Vec<Expression>),
    /// `{<key>: <value>, ...}` in source order
    Hash(Vec<(Expression, Expression)>),
    /// `<left>[<index>]`
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral(n) => write!(f, "{}", n),
            Expression::BooleanLiteral(b) => write!(f, "{}", b),
            Expression::StringLiteral(s) => write!(f, "{}", s),
            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral {
                parameters,
                body,
                name,
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                if name.is_empty() {
                    write!(f, "fn({}) {}", params.join(", "), body)
                } else {
                    write!(f, "fn<{}>({}) {}", name, params.join(", "), body)
                }
            }
            Expression::Call {
                function,
                arguments,
            } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, args.join(", "))
            }
            Expression::Array(elements) => {
                let elems: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elems.join(", "))
            }
            Expression::Hash(pairs) => {
                let rendered: Vec<String> =
                    pairs.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Expression::Index { left, index } => write!(f, "({}[{}])", left, index),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
