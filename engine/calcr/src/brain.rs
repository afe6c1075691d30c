//! The calculator brain.

use std::fmt;

use calc_eval::evaluate_all;
use calc_fmt::describe;
use calc_ir::{Bindings, Op, OpRegistry};

/// RPN engine state for one session.
///
/// Owns the operation stack and the variable bindings. Entries are only ever
/// appended or cleared together; nothing is edited in place. Every mutating
/// call returns the value of the whole stack after the change.
///
/// A `Brain` is a plain owned value. Callers sharing one across threads must
/// serialize access themselves.
#[derive(Clone, Debug, Default)]
pub struct Brain {
    stack: Vec<Op>,
    variables: Bindings,
    registry: OpRegistry,
}

impl Brain {
    /// Empty brain with the built-in operators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a number.
    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        self.stack.push(Op::Operand(value));
        self.evaluate()
    }

    /// Push a reference to a variable. The name is not looked up until
    /// evaluation, so it may be bound later.
    pub fn push_variable(&mut self, name: &str) -> Option<f64> {
        self.stack.push(Op::variable(name));
        self.evaluate()
    }

    /// Push the operator registered under `symbol`.
    ///
    /// Unknown symbols leave the stack untouched.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        if let Some(op) = self.registry.get(symbol) {
            self.stack.push(op.clone());
        } else {
            tracing::debug!(symbol, "ignoring unknown operator");
        }
        self.evaluate()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    ///
    /// The stack is untouched; the returned value reflects the new binding
    /// if the stack references it.
    pub fn set_variable(&mut self, name: &str, value: f64) -> Option<f64> {
        tracing::debug!(name, value, "binding variable");
        self.variables.insert(name.to_string(), value);
        self.evaluate()
    }

    /// Drop every stack entry and every variable binding.
    pub fn clear(&mut self) {
        tracing::debug!(
            depth = self.stack.len(),
            bindings = self.variables.len(),
            "clearing"
        );
        self.stack.clear();
        self.variables.clear();
    }

    /// Value of the whole stack, `None` if it cannot be computed.
    pub fn evaluate(&self) -> Option<f64> {
        evaluate_all(&self.stack, &self.variables)
    }

    /// Infix history of the whole stack, recomputed on each call.
    ///
    /// Empty for an empty stack.
    pub fn description(&self) -> String {
        describe(&self.stack)
    }

    pub fn variable_values(&self) -> &Bindings {
        &self.variables
    }

    /// Direct access to the bindings.
    ///
    /// Changes take effect on the next [`Brain::evaluate`].
    pub fn variable_values_mut(&mut self) -> &mut Bindings {
        &mut self.variables
    }

    /// Stack entries, bottom first.
    pub fn stack(&self) -> &[Op] {
        &self.stack
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn registry(&self) -> &OpRegistry {
        &self.registry
    }
}

impl fmt::Display for Brain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
