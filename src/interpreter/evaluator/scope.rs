use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::{
    ast::FunctionDeclaration,
    interpreter::value::{Value, ValueType},
};

/// A bound variable: its declared type and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableInfo {
    /// Type fixed at declaration; assignments must match it.
    pub var_type: ValueType,
    /// The current value.
    pub value:    Value,
}

/// Tracks block depth, variable bindings and declared functions.
///
/// Variables are keyed by `(name, depth)` and are only visible at the exact
/// depth they were declared at: a lookup never walks outward to enclosing
/// blocks. Functions are global and borrowed from the program tree.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     evaluator::{ScopeManager, VariableInfo},
///     value::{Value, ValueType},
/// };
///
/// let mut scope = ScopeManager::new();
/// scope.enter_block();
/// scope.enter_variable("x", VariableInfo { var_type: ValueType::Integer,
///                                          value:    Value::Integer(1), });
/// assert!(scope.search_variable("x").is_some());
///
/// scope.close_block();
/// assert!(scope.search_variable("x").is_none());
/// ```
#[derive(Debug)]
pub struct ScopeManager<'a> {
    depth:     usize,
    frames:    Vec<HashSet<String>>,
    variables: HashMap<(String, usize), VariableInfo>,
    functions: HashMap<String, &'a FunctionDeclaration>,
}

impl Default for ScopeManager<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ScopeManager<'a> {
    /// Creates a manager at depth zero with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { depth:     0,
               frames:    vec![HashSet::new()],
               variables: HashMap::new(),
               functions: HashMap::new(), }
    }

    /// The current block depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Opens a nested block.
    pub fn enter_block(&mut self) {
        self.depth += 1;
        self.frames.push(HashSet::new());
        trace!(target: "matlang::evaluator", depth = self.depth, "Entered block");
    }

    /// Closes the innermost block and drops the variables declared in it.
    ///
    /// The outermost frame is never closed.
    pub fn close_block(&mut self) {
        if self.depth == 0 {
            return;
        }

        if let Some(frame) = self.frames.pop() {
            for name in frame {
                self.variables.remove(&(name, self.depth));
            }
        }
        self.depth -= 1;
        trace!(target: "matlang::evaluator", depth = self.depth, "Closed block");
    }

    /// Binds `name` at the current depth, replacing an existing binding.
    pub fn enter_variable(&mut self, name: &str, info: VariableInfo) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string());
        }
        self.variables.insert((name.to_string(), self.depth), info);
    }

    /// Looks `name` up at the current depth only.
    #[must_use]
    pub fn search_variable(&self, name: &str) -> Option<&VariableInfo> {
        self.variables.get(&(name.to_string(), self.depth))
    }

    /// Registers a function, replacing one with the same name.
    pub fn enter_function(&mut self, function: &'a FunctionDeclaration) {
        self.functions.insert(function.name.clone(), function);
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn search_function(&self, name: &str) -> Option<&'a FunctionDeclaration> {
        self.functions.get(name).copied()
    }
}
