//! Canonical display symbols of the built-in operators.
//!
//! Single source of truth for the registry, the describer tests and the
//! front-end lexer (which maps ASCII spellings onto these).

/// Multiplication, `×` (U+00D7).
pub const MULTIPLY: &str = "×";
/// Division, `÷` (U+00F7).
pub const DIVIDE: &str = "÷";
/// Addition.
pub const ADD: &str = "+";
/// Subtraction, `−` (U+2212 MINUS SIGN, not the ASCII hyphen).
pub const SUBTRACT: &str = "−";
/// Square root, `√` (U+221A).
pub const SQUARE_ROOT: &str = "√";
/// Sine, radians.
pub const SINE: &str = "sin";
/// Cosine, radians.
pub const COSINE: &str = "cos";
/// The constant π (U+03C0).
pub const PI: &str = "π";

/// Placeholder the describer prints for a missing operand.
pub const MISSING_OPERAND: &str = "?";
