//! Calc Lexer - turns a typed line of calculator keys into tokens.
//!
//! The front end accepts the same keys the calculator face has, spelled
//! either with their display symbols (`×`, `÷`, `−`, `√`, `π`) or with ASCII
//! stand-ins (`*`, `/`, `-`, `sqrt`, `pi`). Operators come out already mapped
//! to the registry's display symbol, so callers never see the ASCII form.
//!
//! Numbers are unsigned: like the keypad, there is no sign key. Unknown
//! characters produce [`TokenKind::Error`] tokens instead of stopping the
//! lexer.

mod raw_token;

use std::ops::Range;

use calc_ir::symbols;
use logos::Logos;

use raw_token::RawToken;

/// Byte range of a token within its line.
pub type Span = Range<usize>;

/// What a token asks the calculator to do.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Push a number.
    Number(f64),
    /// Apply an operator, by registry symbol.
    Operator(&'static str),
    /// Push a variable reference.
    Variable(String),
    /// Store the displayed value into the named variable.
    Store(String),
    /// Reset stack and variables.
    Clear,
    /// Show the current value; no engine call.
    Equals,
    /// Text that is not a key.
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lex one line of input.
pub fn lex(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(line);

    while let Some(token_result) = logos.next() {
        let span = logos.span();
        let kind = match token_result {
            Ok(raw) => convert_token(raw),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }

    tokens
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Number(value) => TokenKind::Number(value),
        RawToken::Multiply => TokenKind::Operator(symbols::MULTIPLY),
        RawToken::Divide => TokenKind::Operator(symbols::DIVIDE),
        RawToken::Add => TokenKind::Operator(symbols::ADD),
        RawToken::Subtract => TokenKind::Operator(symbols::SUBTRACT),
        RawToken::SquareRoot => TokenKind::Operator(symbols::SQUARE_ROOT),
        RawToken::Sine => TokenKind::Operator(symbols::SINE),
        RawToken::Cosine => TokenKind::Operator(symbols::COSINE),
        RawToken::Pi => TokenKind::Operator(symbols::PI),
        RawToken::Store(name) => TokenKind::Store(name),
        RawToken::Clear => TokenKind::Clear,
        RawToken::Equals => TokenKind::Equals,
        RawToken::Ident(name) => TokenKind::Variable(name),
    }
}
