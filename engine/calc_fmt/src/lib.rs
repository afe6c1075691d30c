//! Calc Fmt - infix history text for an RPN operation stack.
//!
//! # Architecture
//!
//! The describer mirrors the evaluator: it renders the subexpression at the
//! top of the stack and hands back whatever lies beneath it. Each rendered
//! subtree carries its own precedence so the enclosing operator can decide
//! whether to wrap it.
//!
//! Unlike evaluation, description never gives up. A missing operand prints
//! as `?`, so `3 +` reads `?+3`.
//!
//! A stack can hold several independent expressions (e.g. `1 2` or
//! `3 4 + 5`); they are printed comma-separated in push order.
//!
//! # Modules
//!
//! - [`describer`]: recursive rendering and the top-level description
//! - [`rules`]: when an operand needs parentheses
//! - [`literals`]: operand text

pub mod describer;
pub mod literals;
pub mod rules;

pub use describer::{describe, describe_one, Rendered};
pub use literals::operand_text;
pub use rules::{needs_parens, OperandSide};
