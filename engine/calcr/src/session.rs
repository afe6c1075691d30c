//! Line-oriented calculator face.
//!
//! A [`Session`] turns typed keys into [`Brain`] calls and keeps the value
//! the calculator is currently showing. Each key behaves like the matching
//! button: numbers and variables push, operators apply, `→M` stores the
//! displayed value and `C` wipes everything.

use std::io::{BufRead, Write};

use calc_fmt::operand_text;
use calc_lexer::{lex, Token, TokenKind};
use thiserror::Error;

use crate::brain::Brain;
use crate::config::SessionConfig;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Text on the line that is not a calculator key. Keys before it were
    /// already applied.
    #[error("unrecognized input '{text}' at offset {offset}")]
    UnrecognizedInput { text: String, offset: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    brain: Brain,
    /// Last value the brain reported, `None` when there is nothing to show.
    display: Option<f64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    pub fn display(&self) -> Option<f64> {
        self.display
    }

    /// Displayed value as text, empty when there is none.
    pub fn display_text(&self) -> String {
        self.display.map(operand_text).unwrap_or_default()
    }

    /// History line: the description followed by `=`, empty for an empty
    /// stack.
    pub fn history(&self) -> String {
        if self.brain.is_empty() {
            String::new()
        } else {
            format!("{}=", self.brain.description())
        }
    }

    /// Press one key.
    ///
    /// Error tokens are skipped here; [`Session::enter_line`] reports them.
    pub fn apply(&mut self, token: &Token) {
        match &token.kind {
            TokenKind::Number(value) => self.display = self.brain.push_operand(*value),
            TokenKind::Operator(symbol) => self.display = self.brain.perform_operation(symbol),
            TokenKind::Variable(name) => self.display = self.brain.push_variable(name),
            TokenKind::Store(name) => {
                // nothing on screen to store
                if let Some(value) = self.display {
                    self.display = self.brain.set_variable(name, value);
                }
            }
            TokenKind::Clear => {
                self.brain.clear();
                self.display = None;
            }
            TokenKind::Equals | TokenKind::Error => {}
        }
    }

    /// Press every key on `line` in order, stopping at the first
    /// unrecognized one.
    pub fn enter_line(&mut self, line: &str) -> Result<(), SessionError> {
        for token in lex(line) {
            if token.kind == TokenKind::Error {
                let text = line.get(token.span.clone()).unwrap_or_default().to_string();
                tracing::debug!(text = %text, offset = token.span.start, "unrecognized input");
                return Err(SessionError::UnrecognizedInput {
                    text,
                    offset: token.span.start,
                });
            }
            self.apply(&token);
        }
        Ok(())
    }

    /// Read lines until end of input, printing the display after each.
    ///
    /// Unrecognized input is reported on `output` and the loop goes on;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        config: &SessionConfig,
    ) -> Result<(), SessionError> {
        let mut line = String::new();
        loop {
            if !config.quiet {
                write!(output, "{}", config.prompt)?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match self.enter_line(&line) {
                Ok(()) => {}
                Err(err @ SessionError::UnrecognizedInput { .. }) => {
                    writeln!(output, "error: {err}")?;
                }
                Err(err) => return Err(err),
            }
            self.write_state(&mut output, config)?;
        }

        if !config.quiet {
            writeln!(output)?;
        }
        Ok(())
    }

    /// Print the display line and, unless quiet, the history line.
    pub fn write_state<W: Write>(
        &self,
        output: &mut W,
        config: &SessionConfig,
    ) -> Result<(), SessionError> {
        writeln!(output, "{}", self.display_text())?;
        if !config.quiet {
            writeln!(output, "{}", self.history())?;
        }
        Ok(())
    }
}
