use std::io::{self, Write};

use crate::config::SessionConfig;
use crate::session::{Session, SessionError};

/// Press `keys` on a fresh session and print its state to `output`.
///
/// Keys may be split across arguments any way the shell splits them; they
/// are joined with spaces into one line.
pub fn eval_to<W: Write>(
    keys: &[String],
    config: &SessionConfig,
    output: &mut W,
) -> Result<Session, SessionError> {
    let mut session = Session::new();
    session.enter_line(&keys.join(" "))?;
    session.write_state(output, config)?;
    Ok(session)
}

/// One-shot evaluation on stdout. Exits 1 on unrecognized input.
pub fn run_eval(keys: &[String], config: &SessionConfig) -> i32 {
    let mut stdout = io::stdout().lock();
    match eval_to(keys, config, &mut stdout) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}
