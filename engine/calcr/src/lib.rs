//! Calcr - the calculator brain and its text front end.
//!
//! # Architecture
//!
//! ```text
//! typed line ──► calc_lexer::lex ──► Session ──► Brain
//!                                                  │
//!                      ┌───────────────────────────┤
//!                      ▼                           ▼
//!            calc_eval::evaluate_all     calc_fmt::describe
//!                      │                           │
//!                      ▼                           ▼
//!                 display value              history line
//! ```
//!
//! [`Brain`] is the engine proper: an operation stack, variable bindings and
//! the built-in operator registry. Every push re-evaluates the whole stack.
//! [`Session`] plays the part of the calculator face: it feeds tokens to the
//! brain, remembers the displayed value and renders display and history.

pub mod brain;
pub mod commands;
pub mod config;
pub mod session;
mod tracing_setup;

pub use brain::Brain;
pub use config::{parse_args, ArgsError, Command, SessionConfig};
pub use session::{Session, SessionError};
pub use tracing_setup::init_tracing;

// Engine types callers need to inspect a brain
pub use calc_ir::{Bindings, Op, OpKind, OpRegistry, Precedence};
