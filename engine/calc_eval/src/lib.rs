//! Calc Eval - reduces an RPN operation stack to a number.
//!
//! Evaluation walks the stack from the top: an operator pulls its operands
//! from whatever lies beneath it, recursively, and reports the unconsumed
//! part of the stack back to its caller as a [`Evaluation::remaining`] slice.
//! Nothing is mutated; the same stack and bindings always give the same
//! answer.
//!
//! There is no error type. A missing operand, an unbound variable or an
//! empty stack all come back as `result: None`.

mod evaluator;

pub use evaluator::{evaluate, evaluate_all, Evaluation};
