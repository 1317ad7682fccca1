// monkey-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.
//!
//! Used only by the AST-walking evaluator; the compiled engine resolves names
//! statically through the symbol table instead.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

/// A lexical environment for variable bindings.
///
/// Environments form a chain through parent references. `Env` is a cheap
/// handle: cloning it shares the underlying bindings, which is how evaluator
/// closures capture their defining scope.
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<String, Object>,
    parent: Option<Env>,
}

impl Env {
    /// Create a new root environment with no parent.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
            })),
        }
    }

    /// Create a child environment with this environment as parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Define a binding in this environment, shadowing any parent binding.
    pub fn define(&self, name: impl Into<String>, value: Object) {
        self.inner.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Look up a binding, walking the parent chain.
    pub fn lookup(&self, name: &str) -> Option<Object> {
        let inner = self.inner.borrow();
        if let Some(value) = inner.bindings.get(name) {
            return Some(value.clone());
        }
        inner.parent.as_ref().and_then(|parent| parent.lookup(name))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
