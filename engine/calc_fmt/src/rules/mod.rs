//! Formatting rules.
//!
//! Only one rule exists today: parentheses around binary operands.

mod parentheses;

pub use parentheses::{needs_parens, OperandSide};
