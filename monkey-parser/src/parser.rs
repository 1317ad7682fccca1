// monkey-parser - Parser for Monkey
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Pratt parser for Monkey source code.
//!
//! Converts tokens into the AST of [`crate::ast`]. The parser never aborts:
//! it accumulates error strings and always returns a `Program`, leaving the
//! caller to inspect [`Parser::errors`].

use crate::ast::{BlockStatement, Expression, Identifier, Program, Statement};
use crate::lexer::Lexer;
use crate::token::Token;

/// Operator binding strengths, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // myFunction(x)
    Index,       // array[index]
}

fn precedence_of(token: &Token) -> Precedence {
    match token {
        Token::Eq | Token::NotEq => Precedence::Equals,
        Token::Lt | Token::Gt => Precedence::LessGreater,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Slash | Token::Asterisk => Precedence::Product,
        Token::LParen => Precedence::Call,
        Token::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// Parse a source string into a program, or the accumulated parse errors.
pub fn parse(source: &str) -> Result<Program, Vec<String>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}

/// The parser converts tokens into AST nodes.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Parser {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
        }
    }

    /// Parse the entire input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while self.cur_token != Token::Eof {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }
        program
    }

    /// The errors accumulated while parsing.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the parser, yielding its errors.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let name = match self.peek_token.clone() {
            Token::Ident(name) => {
                self.next_token();
                Identifier::new(name)
            }
            _ => {
                self.peek_error("IDENT");
                return None;
            }
        };

        if !self.expect_peek(Token::Assign) {
            return None;
        }
        self.next_token();

        let mut value = self.parse_expression(Precedence::Lowest)?;
        // A function literal bound by `let` learns its own name, so the
        // compiler can resolve recursive references to the current closure.
        if let Expression::FunctionLiteral { name: fn_name, .. } = &mut value {
            fn_name.clone_from(&name.name);
        }

        if self.peek_token == Token::Semicolon {
            self.next_token();
        }
        Some(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_token == Token::Semicolon {
            self.next_token();
        }
        Some(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek_token == Token::Semicolon {
            self.next_token();
        }
        Some(Statement::Expression(expr))
    }

    fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        self.next_token();
        while self.cur_token != Token::RBrace && self.cur_token != Token::Eof {
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
            }
            self.next_token();
        }
        block
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while self.peek_token != Token::Semicolon && precedence < precedence_of(&self.peek_token) {
            left = match self.peek_token {
                Token::Plus
                | Token::Minus
                | Token::Slash
                | Token::Asterisk
                | Token::Eq
                | Token::NotEq
                | Token::Lt
                | Token::Gt => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                }
                Token::LParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                Token::LBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                _ => return Some(left),
            };
        }
        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur_token.clone() {
            Token::Ident(name) => Some(Expression::Identifier(Identifier::new(name))),
            Token::Int(n) => Some(Expression::IntegerLiteral(n)),
            Token::String(s) => Some(Expression::StringLiteral(s)),
            Token::True => Some(Expression::BooleanLiteral(true)),
            Token::False => Some(Expression::BooleanLiteral(false)),
            Token::Bang | Token::Minus => self.parse_prefix_expression(),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => {
                let elements = self.parse_expression_list(Token::RBracket)?;
                Some(Expression::Array(elements))
            }
            Token::LBrace => self.parse_hash_literal(),
            other => {
                self.errors
                    .push(format!("no prefix parse function for {} found", other));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = self.cur_token.to_string();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix {
            operator,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = self.cur_token.to_string();
        let precedence = precedence_of(&self.cur_token);
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(Token::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RParen) {
            return None;
        }
        if !self.expect_peek(Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token == Token::Else {
            self.next_token();
            if !self.expect_peek(Token::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(Token::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(Token::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();
        Some(Expression::FunctionLiteral {
            parameters,
            body,
            name: String::new(),
        })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek_token == Token::RParen {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.current_identifier()?);
        while self.peek_token == Token::Comma {
            self.next_token();
            self.next_token();
            parameters.push(self.current_identifier()?);
        }

        if !self.expect_peek(Token::RParen) {
            return None;
        }
        Some(parameters)
    }

    fn current_identifier(&mut self) -> Option<Identifier> {
        match &self.cur_token {
            Token::Ident(name) => Some(Identifier::new(name.clone())),
            other => {
                self.errors
                    .push(format!("expected parameter name, got {} instead", other));
                None
            }
        }
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(Token::RParen)?;
        Some(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RBracket) {
            return None;
        }
        Some(Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    fn parse_expression_list(&mut self, end: Token) -> Option<Vec<Expression>> {
        let mut list = Vec::new();
        if self.peek_token == end {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_token == Token::Comma {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();
        while self.peek_token != Token::RBrace {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;
            if !self.expect_peek(Token::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek_token != Token::RBrace && !self.expect_peek(Token::Comma) {
                return None;
            }
        }
        if !self.expect_peek(Token::RBrace) {
            return None;
        }
        Some(Expression::Hash(pairs))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn expect_peek(&mut self, expected: Token) -> bool {
        if self.peek_token == expected {
            self.next_token();
            true
        } else {
            let expected = expected.to_string();
            self.peek_error(&expected);
            false
        }
    }

    fn peek_error(&mut self, expected: &str) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            expected, self.peek_token
        ));
    }
}

// ============================================================================
// Tests
// ============================================================================
