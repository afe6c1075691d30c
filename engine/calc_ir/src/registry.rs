//! Built-in operator registry.
//!
//! The table is fixed at construction: eight operators, keyed by their
//! display symbol. Lookups hand out clones of the stored [`Op`], so pushing an
//! operator never constructs a new definition.

use rustc_hash::FxHashMap;

use crate::op::{Associativity, Op, Precedence};
use crate::symbols;

/// Symbol → operator definition.
#[derive(Clone, Debug)]
pub struct OpRegistry {
    ops: FxHashMap<&'static str, Op>,
}

impl OpRegistry {
    /// Registry holding exactly the built-in operators.
    pub fn builtin() -> Self {
        let table = builtin_table();
        let mut ops = FxHashMap::default();
        ops.reserve(table.len());
        for op in table {
            if let Some(symbol) = op.operator_symbol() {
                ops.insert(symbol, op);
            }
        }
        OpRegistry { ops }
    }

    /// Look up an operator by its display symbol.
    #[inline]
    pub fn get(&self, symbol: &str) -> Option<&Op> {
        self.ops.get(symbol)
    }

    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.ops.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// All operators, sorted by symbol so listings are stable.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        let mut entries: Vec<(&&'static str, &Op)> = self.ops.iter().collect();
        entries.sort_unstable_by_key(|(symbol, _)| **symbol);
        entries.into_iter().map(|(_, op)| op)
    }
}

impl Default for OpRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The built-in operator table.
///
/// Binary functions receive `(first_popped, second_popped)`; the first popped
/// value is the right-hand operand.
fn builtin_table() -> [Op; 8] {
    [
        Op::binary(
            symbols::MULTIPLY,
            Precedence::MULTIPLICATIVE,
            Associativity::Full,
            |a, b| a * b,
        ),
        Op::binary(
            symbols::DIVIDE,
            Precedence::MULTIPLICATIVE,
            Associativity::Left,
            |a, b| b / a,
        ),
        Op::binary(
            symbols::ADD,
            Precedence::ADDITIVE,
            Associativity::Full,
            |a, b| a + b,
        ),
        Op::binary(
            symbols::SUBTRACT,
            Precedence::ADDITIVE,
            Associativity::Left,
            |a, b| b - a,
        ),
        Op::unary(symbols::SQUARE_ROOT, f64::sqrt),
        Op::unary(symbols::SINE, f64::sin),
        Op::unary(symbols::COSINE, f64::cos),
        Op::nullary(symbols::PI, || std::f64::consts::PI),
    ]
}

#[cfg(test)]
mod tests;
