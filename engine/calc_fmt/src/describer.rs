//! Recursive stack description.

use calc_ir::{symbols, Op, Precedence};
use calc_stack::ensure_sufficient_stack;

use crate::literals::operand_text;
use crate::rules::{needs_parens, OperandSide};

/// Text of the topmost subexpression of a stack.
#[derive(Clone, Debug)]
pub struct Rendered<'a> {
    pub text: String,
    /// Precedence of the outermost operator in `text`, used by an enclosing
    /// operator to decide on parentheses.
    pub precedence: Precedence,
    /// Entries below the rendered subexpression.
    pub remaining: &'a [Op],
}

impl<'a> Rendered<'a> {
    #[inline]
    fn atom(text: String, remaining: &'a [Op]) -> Self {
        Rendered {
            text,
            precedence: Precedence::MAX,
            remaining,
        }
    }

    /// Placeholder for an operand the stack does not have.
    #[inline]
    fn missing(remaining: &'a [Op]) -> Self {
        Self::atom(symbols::MISSING_OPERAND.to_string(), remaining)
    }
}

/// Render the subexpression ending at the top of `ops`.
///
/// Always consumes at least the top entry of a non-empty stack. Missing
/// operands render as `?`.
pub fn describe_one(ops: &[Op]) -> Rendered<'_> {
    ensure_sufficient_stack(|| {
        let Some((top, rest)) = ops.split_last() else {
            return Rendered::missing(ops);
        };

        match top {
            Op::Operand(value) => Rendered::atom(operand_text(*value), rest),
            Op::Variable(_) | Op::Nullary { .. } => Rendered::atom(top.symbol().into_owned(), rest),
            Op::Unary { symbol, .. } => {
                let operand = describe_one(rest);
                Rendered::atom(format!("{symbol}({})", operand.text), operand.remaining)
            }
            Op::Binary {
                symbol,
                precedence,
                associativity,
                ..
            } => {
                // first popped prints on the right: `b ∘ a`
                let right = describe_one(rest);
                let left = describe_one(right.remaining);

                let mut text =
                    String::with_capacity(left.text.len() + symbol.len() + right.text.len() + 4);
                let wrap_left = needs_parens(
                    *precedence,
                    *associativity,
                    left.precedence,
                    OperandSide::Left,
                );
                let wrap_right = needs_parens(
                    *precedence,
                    *associativity,
                    right.precedence,
                    OperandSide::Right,
                );
                push_operand(&mut text, &left.text, wrap_left);
                text.push_str(symbol);
                push_operand(&mut text, &right.text, wrap_right);

                Rendered {
                    text,
                    precedence: *precedence,
                    remaining: left.remaining,
                }
            }
        }
    })
}

fn push_operand(buf: &mut String, operand: &str, wrap: bool) {
    if wrap {
        buf.push('(');
        buf.push_str(operand);
        buf.push(')');
    } else {
        buf.push_str(operand);
    }
}

/// Describe the whole stack.
///
/// Independent subexpressions are joined with `,` in the order they were
/// pushed: `1 2` reads `1,2` and `3 4 + 5` reads `3+4,5`. An empty stack
/// describes as the empty string.
#[tracing::instrument(level = "trace", skip_all, fields(depth = ops.len()))]
pub fn describe(ops: &[Op]) -> String {
    let mut parts = Vec::new();
    let mut remaining = ops;
    while !remaining.is_empty() {
        let rendered = describe_one(remaining);
        parts.push(rendered.text);
        remaining = rendered.remaining;
    }
    parts.reverse();
    parts.join(",")
}
