//! Recursive evaluation of one subtree at a time.

use calc_ir::{Bindings, Op};
use calc_stack::ensure_sufficient_stack;

/// Outcome of evaluating the topmost complete subexpression of a stack.
#[derive(Clone, Copy, Debug)]
pub struct Evaluation<'a> {
    /// Value of the subexpression, `None` if it could not be computed.
    pub result: Option<f64>,
    /// Entries below the subexpression, still unconsumed.
    ///
    /// When an operator lacks operands this is the whole input slice: no
    /// entry counts as consumed.
    pub remaining: &'a [Op],
}

impl<'a> Evaluation<'a> {
    #[inline]
    fn produced(value: f64, remaining: &'a [Op]) -> Self {
        Evaluation {
            result: Some(value),
            remaining,
        }
    }

    /// No result and no progress.
    #[inline]
    fn abandoned(ops: &'a [Op]) -> Self {
        Evaluation {
            result: None,
            remaining: ops,
        }
    }
}

/// Evaluate the subexpression ending at the top of `ops`.
///
/// - operand, constant: their value; the entry is consumed
/// - variable: its binding, or `None` when unbound; the entry is consumed
///   either way
/// - unary: the function applied to the subexpression beneath it
/// - binary: `apply(a, b)` where `a` is the subexpression directly beneath
///   the operator and `b` the one beneath `a`
///
/// An operator whose operands cannot be evaluated is abandoned: `None` with
/// `remaining == ops`.
pub fn evaluate<'a>(ops: &'a [Op], bindings: &Bindings) -> Evaluation<'a> {
    ensure_sufficient_stack(|| {
        let Some((top, rest)) = ops.split_last() else {
            return Evaluation::abandoned(ops);
        };

        match top {
            Op::Operand(value) => Evaluation::produced(*value, rest),
            Op::Variable(name) => Evaluation {
                result: bindings.get(name).copied(),
                remaining: rest,
            },
            Op::Nullary { apply, .. } => Evaluation::produced(apply(), rest),
            Op::Unary { apply, .. } => {
                let operand = evaluate(rest, bindings);
                match operand.result {
                    Some(x) => Evaluation::produced(apply(x), operand.remaining),
                    None => Evaluation::abandoned(ops),
                }
            }
            Op::Binary { apply, .. } => {
                let first = evaluate(rest, bindings);
                let Some(a) = first.result else {
                    return Evaluation::abandoned(ops);
                };
                let second = evaluate(first.remaining, bindings);
                let Some(b) = second.result else {
                    return Evaluation::abandoned(ops);
                };
                Evaluation::produced(apply(a, b), second.remaining)
            }
        }
    })
}

/// Evaluate the whole stack, discarding the remainder.
#[tracing::instrument(level = "trace", skip_all, fields(depth = ops.len()))]
pub fn evaluate_all(ops: &[Op], bindings: &Bindings) -> Option<f64> {
    let result = evaluate(ops, bindings).result;
    tracing::trace!(?result, "evaluated");
    result
}
