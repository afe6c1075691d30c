use std::io;

use crate::config::SessionConfig;
use crate::session::Session;

/// Interactive session on stdin and stdout.
pub fn run_repl(config: &SessionConfig) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new();

    match session.run(stdin.lock(), stdout.lock(), config) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}
