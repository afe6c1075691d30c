//! Calc IR - operation data model for the RPN calculator engine.
//!
//! Everything the evaluator and the describer agree on lives here:
//!
//! - [`Op`]: one entry of the operation stack (operand, operator, constant
//!   or variable reference)
//! - [`Precedence`] and [`Associativity`]: the only operator metadata the
//!   describer needs to place parentheses
//! - [`OpRegistry`]: the fixed table of built-in operators, keyed by symbol
//! - [`Bindings`]: variable name to value map consulted at evaluation time
//!
//! Operators are plain data (symbol, precedence, associativity, function
//! pointer). Adding one to [`symbols`] and the registry table is enough for
//! both evaluation and description to pick it up.

mod op;
mod registry;
pub mod symbols;

pub use op::{Associativity, BinaryFn, NullaryFn, Op, OpKind, Precedence, UnaryFn};
pub use registry::OpRegistry;

/// Variable bindings, resolved against `Op::Variable` entries at evaluation time.
pub type Bindings = rustc_hash::FxHashMap<String, f64>;
