//! Command line configuration for the `calc` binary.
//!
//! Arguments are parsed by hand: a command word, then expression tokens for
//! `eval`, with `--flag` options accepted anywhere. Only arguments starting
//! with `--` are options, so `-` and `->M` pass through as calculator keys.

use thiserror::Error;

/// Prompt printed before each interactive line.
pub const DEFAULT_PROMPT: &str = "> ";

/// Output settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print only the display value: no prompt, no history line.
    pub quiet: bool,
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            quiet: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read lines from stdin until end of input.
    Repl,
    /// Apply the given keys once and print the result.
    Eval(Vec<String>),
    /// List the registered operators.
    Ops,
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'eval' needs at least one key, e.g. `calc eval 3 4 +`")]
    MissingExpression,
}

/// Parse arguments, program name excluded.
///
/// No command word means [`Command::Repl`].
pub fn parse_args(args: &[String]) -> Result<(Command, SessionConfig), ArgsError> {
    let mut config = SessionConfig::default();
    let mut words = Vec::new();
    let mut help = false;

    for arg in args {
        if arg == "--quiet" {
            config.quiet = true;
        } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
            config.prompt = prompt.to_string();
        } else if arg == "--help" || arg == "-h" {
            help = true;
        } else if arg.starts_with("--") && arg.len() > 2 {
            return Err(ArgsError::UnknownFlag(arg.clone()));
        } else {
            words.push(arg.clone());
        }
    }

    if help {
        return Ok((Command::Help, config));
    }

    let Some((first, rest)) = words.split_first() else {
        return Ok((Command::Repl, config));
    };

    let command = match first.as_str() {
        "repl" => Command::Repl,
        "ops" => Command::Ops,
        "help" => Command::Help,
        "eval" => {
            if rest.is_empty() {
                return Err(ArgsError::MissingExpression);
            }
            Command::Eval(rest.to_vec())
        }
        other => return Err(ArgsError::UnknownCommand(other.to_string())),
    };

    Ok((command, config))
}
