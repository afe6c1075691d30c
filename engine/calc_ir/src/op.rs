//! Operation stack entries.
//!
//! [`Op`] is a closed sum type: the evaluator and the describer match on it
//! exhaustively, so a new kind of entry is a compile error everywhere it
//! needs handling. Operator payloads are fixed data (symbol, rank, function
//! pointer) and are copied out of the registry when pushed.

use std::borrow::Cow;
use std::fmt;

/// `ℝ → ℝ`
pub type UnaryFn = fn(f64) -> f64;

/// `ℝ × ℝ → ℝ`, called as `apply(first_popped, second_popped)`.
///
/// For non-commutative operators the first argument is the *right-hand*
/// mathematical operand: subtraction is `|a, b| b - a`.
pub type BinaryFn = fn(f64, f64) -> f64;

/// `() → ℝ`
pub type NullaryFn = fn() -> f64;

/// Binding strength used by the describer to decide on parentheses.
///
/// Higher binds tighter. Operands, variables, constants and unary calls all
/// sit at [`Precedence::MAX`] and never need wrapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u32);

impl Precedence {
    /// `+` and `−`.
    pub const ADDITIVE: Self = Precedence(0);
    /// `×` and `÷`.
    pub const MULTIPLICATIVE: Self = Precedence(1);
    /// Anything that is not a binary operator.
    pub const MAX: Self = Precedence(u32::MAX);
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::MAX {
            f.write_str("max")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// How a binary operator groups with itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a∘(b∘c) == (a∘b)∘c`, e.g. `+` and `×`.
    Full,
    /// Groups left only, e.g. `−` and `÷`: `a−(b−c)` must keep its parentheses.
    Left,
}

/// Kind tag of an [`Op`], without payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Operand,
    Unary,
    Binary,
    Nullary,
    Variable,
}

impl OpKind {
    /// Number of stack entries an op of this kind consumes.
    pub const fn arity(self) -> usize {
        match self {
            OpKind::Operand | OpKind::Nullary | OpKind::Variable => 0,
            OpKind::Unary => 1,
            OpKind::Binary => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpKind::Operand => "operand",
            OpKind::Unary => "unary",
            OpKind::Binary => "binary",
            OpKind::Nullary => "constant",
            OpKind::Variable => "variable",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the operation stack.
#[derive(Clone, Debug)]
pub enum Op {
    /// Literal number.
    Operand(f64),
    /// Prefix function of one operand, printed as `symbol(x)`.
    Unary { symbol: &'static str, apply: UnaryFn },
    /// Infix operator of two operands.
    Binary {
        symbol: &'static str,
        precedence: Precedence,
        associativity: Associativity,
        apply: BinaryFn,
    },
    /// Constant, e.g. `π`.
    Nullary { symbol: &'static str, apply: NullaryFn },
    /// Reference to a binding, looked up at evaluation time.
    Variable(String),
}

impl Op {
    pub const fn unary(symbol: &'static str, apply: UnaryFn) -> Self {
        Op::Unary { symbol, apply }
    }

    pub const fn binary(
        symbol: &'static str,
        precedence: Precedence,
        associativity: Associativity,
        apply: BinaryFn,
    ) -> Self {
        Op::Binary {
            symbol,
            precedence,
            associativity,
            apply,
        }
    }

    pub const fn nullary(symbol: &'static str, apply: NullaryFn) -> Self {
        Op::Nullary { symbol, apply }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Op::Variable(name.into())
    }

    pub const fn kind(&self) -> OpKind {
        match self {
            Op::Operand(_) => OpKind::Operand,
            Op::Unary { .. } => OpKind::Unary,
            Op::Binary { .. } => OpKind::Binary,
            Op::Nullary { .. } => OpKind::Nullary,
            Op::Variable(_) => OpKind::Variable,
        }
    }

    /// Printable name: the operator symbol, the variable name, or the
    /// operand's literal text.
    pub fn symbol(&self) -> Cow<'_, str> {
        match self {
            Op::Operand(value) => Cow::Owned(value.to_string()),
            Op::Unary { symbol, .. } | Op::Binary { symbol, .. } | Op::Nullary { symbol, .. } => {
                Cow::Borrowed(*symbol)
            }
            Op::Variable(name) => Cow::Borrowed(name.as_str()),
        }
    }

    /// Registry key for operator entries; `None` for operands and variables.
    pub const fn operator_symbol(&self) -> Option<&'static str> {
        match self {
            Op::Unary { symbol, .. } | Op::Binary { symbol, .. } | Op::Nullary { symbol, .. } => {
                Some(*symbol)
            }
            Op::Operand(_) | Op::Variable(_) => None,
        }
    }

    /// Configured rank for binary operators, [`Precedence::MAX`] otherwise.
    pub const fn precedence(&self) -> Precedence {
        match self {
            Op::Binary { precedence, .. } => *precedence,
            _ => Precedence::MAX,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}
