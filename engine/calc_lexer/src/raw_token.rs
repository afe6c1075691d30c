//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before ASCII
//! spellings are mapped onto the registry's display symbols.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    // Numbers: `12`, `3.5`, `5.`, `.5`, `1e3`, `2.5E-2`
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("×")]
    #[token("*")]
    Multiply,
    #[token("÷")]
    #[token("/")]
    Divide,
    #[token("+")]
    Add,
    #[token("−")]
    #[token("-")]
    Subtract,
    #[token("√")]
    #[token("sqrt")]
    SquareRoot,
    #[token("sin")]
    Sine,
    #[token("cos")]
    Cosine,
    #[token("π")]
    #[token("pi")]
    Pi,

    // Memory store: `→M` or `->M`
    #[regex(r"(→|->)[A-Za-z_][A-Za-z0-9_]*", |lex| store_target(lex.slice()))]
    Store(String),

    #[token("clear")]
    #[token("C", priority = 3)]
    Clear,

    #[token("=")]
    Equals,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

fn store_target(slice: &str) -> String {
    slice
        .strip_prefix("->")
        .or_else(|| slice.strip_prefix('→'))
        .unwrap_or(slice)
        .to_string()
}
