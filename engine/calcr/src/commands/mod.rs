//! Command handlers for the `calc` binary.
//!
//! Each handler returns the process exit code. The writer-based variants
//! (`eval_to`, `write_ops`) carry the logic so tests can capture output.

mod eval;
mod ops;
mod repl;

pub use eval::{eval_to, run_eval};
pub use ops::{list_ops, write_ops};
pub use repl::run_repl;
