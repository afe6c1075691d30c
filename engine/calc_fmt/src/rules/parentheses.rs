//! Parentheses around binary operands.
//!
//! # Decision
//!
//! Add parentheses only where the infix text would otherwise read as a
//! different computation. Infix text groups left, so:
//!
//! - a looser operand always needs them: `(3+4)×2`
//! - a right-hand operand at the same precedence needs them when the
//!   operator is [`Associativity::Left`]: `1−(2−3)`, `8÷(4÷2)`
//! - a left-hand operand at the same precedence never does: `1−2−3`
//!
//! Operands that are not binary expressions report [`Precedence::MAX`] and
//! are never wrapped; unary calls carry their own parentheses.

use calc_ir::{Associativity, Precedence};

/// Side of the infix operator an operand is printed on.
///
/// For a stack `b a ∘` the first-popped operand `a` prints on the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandSide {
    Left,
    Right,
}

/// Whether an operand of precedence `operand` printed on `side` of an
/// operator with the given `precedence` and `associativity` must be wrapped.
pub fn needs_parens(
    precedence: Precedence,
    associativity: Associativity,
    operand: Precedence,
    side: OperandSide,
) -> bool {
    if precedence > operand {
        return true;
    }
    side == OperandSide::Right && precedence == operand && associativity == Associativity::Left
}
