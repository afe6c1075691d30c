use super::*;
use crate::OpKind;
use pretty_assertions::assert_eq;

fn binary_parts(op: &Op) -> Option<(Precedence, Associativity, f64)> {
    match op {
        Op::Binary {
            precedence,
            associativity,
            apply,
            ..
        } => Some((*precedence, *associativity, apply(2.0, 8.0))),
        _ => None,
    }
}

#[test]
fn builtin_has_exactly_eight_operators() {
    let registry = OpRegistry::builtin();
    assert_eq!(registry.len(), 8);
    assert!(!registry.is_empty());
}

#[test]
fn builtin_symbols_are_registered() {
    let registry = OpRegistry::builtin();
    for symbol in [
        symbols::MULTIPLY,
        symbols::DIVIDE,
        symbols::ADD,
        symbols::SUBTRACT,
        symbols::SQUARE_ROOT,
        symbols::SINE,
        symbols::COSINE,
        symbols::PI,
    ] {
        assert!(registry.contains(symbol), "missing {symbol}");
    }
}

#[test]
fn ascii_spellings_are_not_registered() {
    let registry = OpRegistry::builtin();
    for symbol in ["*", "/", "-", "sqrt", "pi", "%"] {
        assert!(registry.get(symbol).is_none(), "unexpected {symbol}");
    }
}

#[test]
fn multiplicative_operators() {
    let registry = OpRegistry::builtin();

    let mul = registry.get(symbols::MULTIPLY).and_then(binary_parts);
    assert_eq!(
        mul,
        Some((Precedence::MULTIPLICATIVE, Associativity::Full, 16.0))
    );

    // first popped (2) divides second popped (8)
    let div = registry.get(symbols::DIVIDE).and_then(binary_parts);
    assert_eq!(
        div,
        Some((Precedence::MULTIPLICATIVE, Associativity::Left, 4.0))
    );
}

#[test]
fn additive_operators() {
    let registry = OpRegistry::builtin();

    let add = registry.get(symbols::ADD).and_then(binary_parts);
    assert_eq!(add, Some((Precedence::ADDITIVE, Associativity::Full, 10.0)));

    // first popped (2) is subtracted from second popped (8)
    let sub = registry.get(symbols::SUBTRACT).and_then(binary_parts);
    assert_eq!(sub, Some((Precedence::ADDITIVE, Associativity::Left, 6.0)));
}

#[test]
fn unary_and_constant_kinds() {
    let registry = OpRegistry::builtin();
    let kind = |symbol: &str| registry.get(symbol).map(Op::kind);

    assert_eq!(kind(symbols::SQUARE_ROOT), Some(OpKind::Unary));
    assert_eq!(kind(symbols::SINE), Some(OpKind::Unary));
    assert_eq!(kind(symbols::COSINE), Some(OpKind::Unary));
    assert_eq!(kind(symbols::PI), Some(OpKind::Nullary));
}

#[test]
fn unary_functions() {
    let registry = OpRegistry::builtin();
    let apply = |symbol: &str, x: f64| match registry.get(symbol) {
        Some(Op::Unary { apply, .. }) => Some(apply(x)),
        _ => None,
    };

    assert_eq!(apply(symbols::SQUARE_ROOT, 81.0), Some(9.0));
    assert_eq!(apply(symbols::SINE, 0.0), Some(0.0));
    assert_eq!(apply(symbols::COSINE, 0.0), Some(1.0));
}

#[test]
fn pi_constant() {
    let registry = OpRegistry::builtin();
    let value = match registry.get(symbols::PI) {
        Some(Op::Nullary { apply, .. }) => Some(apply()),
        _ => None,
    };
    assert_eq!(value, Some(std::f64::consts::PI));
}

#[test]
fn non_binary_precedence_is_max() {
    let registry = OpRegistry::builtin();
    for symbol in [symbols::SQUARE_ROOT, symbols::SINE, symbols::PI] {
        assert_eq!(
            registry.get(symbol).map(Op::precedence),
            Some(Precedence::MAX)
        );
    }
    assert_eq!(Op::Operand(1.0).precedence(), Precedence::MAX);
    assert_eq!(Op::variable("M").precedence(), Precedence::MAX);
}

#[test]
fn iter_is_sorted_by_symbol() {
    let registry = OpRegistry::builtin();
    let listed: Vec<String> = registry.iter().map(|op| op.symbol().into_owned()).collect();
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
    assert_eq!(listed.len(), 8);
}

#[test]
fn symbols_of_non_operators() {
    assert_eq!(Op::Operand(2.5).symbol(), "2.5");
    assert_eq!(Op::Operand(3.0).to_string(), "3");
    assert_eq!(Op::variable("M").symbol(), "M");
    assert_eq!(Op::Operand(2.5).operator_symbol(), None);
    assert_eq!(Op::variable("M").operator_symbol(), None);
}

#[test]
fn kind_arity() {
    assert_eq!(OpKind::Operand.arity(), 0);
    assert_eq!(OpKind::Variable.arity(), 0);
    assert_eq!(OpKind::Nullary.arity(), 0);
    assert_eq!(OpKind::Unary.arity(), 1);
    assert_eq!(OpKind::Binary.arity(), 2);
}

#[test]
fn precedence_display() {
    assert_eq!(Precedence::ADDITIVE.to_string(), "0");
    assert_eq!(Precedence::MULTIPLICATIVE.to_string(), "1");
    assert_eq!(Precedence::MAX.to_string(), "max");
    assert!(Precedence::MULTIPLICATIVE > Precedence::ADDITIVE);
}
