// monkey-core - AST-walking evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! AST-walking evaluator for Monkey programs.
//!
//! Errors and `return` travel as `Object::Error` / `Object::ReturnValue`
//! values that short-circuit evaluation; there is no host-level error
//! channel. The evaluator and the bytecode VM must produce identical values
//! for every program that stays clear of division by zero, `puts` ordering,
//! and hash iteration order.

use std::rc::Rc;

use im::{HashMap, Vector};

use monkey_parser::ast::{BlockStatement, Expression, Program, Statement};

use crate::builtins;
use crate::env::Env;
use crate::object::{Function, HashPair, Object};

/// Evaluate a program in the given environment.
pub fn eval_program(program: &Program, env: &Env) -> Object {
    let mut result = Object::Null;
    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match &result {
            Object::ReturnValue(value) => return value.as_ref().clone(),
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(stmt: &Statement, env: &Env) -> Object {
    match stmt {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.define(name.name.clone(), value);
            Object::Null
        }
        Statement::Return(value) => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Rc::new(value))
        }
        Statement::Expression(expr) => eval_expression(expr, env),
    }
}

/// Evaluate a block, leaving `ReturnValue` wrappers intact so they unwind
/// through nested blocks up to the enclosing function call.
fn eval_block_statement(block: &BlockStatement, env: &Env) -> Object {
    let mut result = Object::Null;
    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_expression(expr: &Expression, env: &Env) -> Object {
    match expr {
        Expression::IntegerLiteral(n) => Object::Integer(*n),
        Expression::BooleanLiteral(b) => Object::Boolean(*b),
        Expression::StringLiteral(s) => Object::string(s),

        Expression::Identifier(ident) => {
            if let Some(value) = env.lookup(&ident.name) {
                return value;
            }
            if let Some(builtin) = builtins::lookup(&ident.name) {
                return Object::Builtin(builtin);
            }
            Object::error(format!("identifier not found: {}", ident.name))
        }

        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, right)
        }

        Expression::Infix {
            operator,
            left,
            right,
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, left, right)
        }

        Expression::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block_statement(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block_statement(alternative, env)
            } else {
                Object::Null
            }
        }

        Expression::FunctionLiteral {
            parameters, body, ..
        } => Object::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
        })),

        Expression::Call {
            function,
            arguments,
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            let args = match eval_expressions(arguments, env) {
                Ok(args) => args,
                Err(err) => return err,
            };
            apply_function(function, &args)
        }

        Expression::Array(elements) => match eval_expressions(elements, env) {
            Ok(elements) => Object::Array(Vector::from(elements)),
            Err(err) => err,
        },

        Expression::Hash(pairs) => eval_hash_literal(pairs, env),

        Expression::Index { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
    }
}

fn eval_expressions(exprs: &[Expression], env: &Env) -> Result<Vec<Object>, Object> {
    let mut results = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return Err(value);
        }
        results.push(value);
    }
    Ok(results)
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => Object::Boolean(!right.is_truthy()),
        "-" => match right {
            Object::Integer(n) => Object::Integer(n.wrapping_neg()),
            other => Object::error(format!("unknown operator: -{}", other.type_name())),
        },
        _ => Object::error(format!("unknown operator: {}{}", operator, right.type_name())),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(operator, *l, *r)
        }
        (Object::String(l), Object::String(r)) => match operator {
            "+" => Object::string(format!("{}{}", l, r)),
            "==" => Object::Boolean(left == right),
            "!=" => Object::Boolean(left != right),
            _ => Object::error(format!(
                "unknown operator: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            )),
        },
        _ => match operator {
            "==" => Object::Boolean(left == right),
            "!=" => Object::Boolean(left != right),
            _ if left.type_name() != right.type_name() => Object::error(format!(
                "type mismatch: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            )),
            _ => Object::error(format!(
                "unknown operator: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            )),
        },
    }
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left.wrapping_add(right)),
        "-" => Object::Integer(left.wrapping_sub(right)),
        "*" => Object::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Object::error("division by zero")
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        }
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        _ => Object::error(format!("unknown operator: INTEGER {} INTEGER", operator)),
    }
}

fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> Object {
    let mut hash = HashMap::new();
    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => {
                return Object::error(format!("unusable as hash key: {}", key.type_name()));
            }
        };
        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }
        hash.insert(hash_key, HashPair { key, value });
    }
    Object::Hash(hash)
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (&left, &index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Object::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        (Object::Hash(pairs), _) => match index.hash_key() {
            Some(hash_key) => pairs
                .get(&hash_key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Object::Null),
            None => Object::error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => Object::error(format!(
            "index operator not supported: {}",
            left.type_name()
        )),
    }
}

/// Call a function value with already-evaluated arguments.
pub fn apply_function(function: Object, args: &[Object]) -> Object {
    match function {
        Object::Function(func) => {
            if args.len() != func.parameters.len() {
                return Object::error(format!(
                    "wrong number of arguments: want={}, got={}",
                    func.parameters.len(),
                    args.len()
                ));
            }
            let extended = func.env.child();
            for (param, arg) in func.parameters.iter().zip(args) {
                extended.define(param.name.clone(), arg.clone());
            }
            unwrap_return_value(eval_block_statement(&func.body, &extended))
        }
        Object::Builtin(builtin) => (builtin.func)(args).unwrap_or(Object::Null),
        other => Object::error(format!("not a function: {}", other.type_name())),
    }
}

fn unwrap_return_value(value: Object) -> Object {
    match value {
        Object::ReturnValue(inner) => inner.as_ref().clone(),
        other => other,
    }
}
