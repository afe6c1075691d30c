//! End-to-end tests of the text front end.
//!
//! Sessions read from an in-memory reader and write to a byte buffer, so the
//! exact terminal output is checked without a terminal.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Cursor;

use calcr::commands::{eval_to, write_ops};
use calcr::{OpRegistry, Session, SessionConfig, SessionError};
use pretty_assertions::assert_eq;

fn quiet() -> SessionConfig {
    SessionConfig {
        quiet: true,
        ..SessionConfig::default()
    }
}

fn run(input: &str, config: &SessionConfig) -> String {
    let mut output = Vec::new();
    Session::new()
        .run(Cursor::new(input), &mut output, config)
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn eval(keys: &[&str], config: &SessionConfig) -> Result<String, SessionError> {
    let keys: Vec<String> = keys.iter().map(ToString::to_string).collect();
    let mut output = Vec::new();
    eval_to(&keys, config, &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

mod repl {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prompts_display_and_history() {
        assert_eq!(
            run("3 4 +\n2 ×\n", &SessionConfig::default()),
            "> 7\n3+4=\n> 14\n(3+4)×2=\n> \n"
        );
    }

    #[test]
    fn custom_prompt() {
        let config = SessionConfig {
            prompt: "rpn: ".to_string(),
            ..SessionConfig::default()
        };
        assert_eq!(run("2\n", &config), "rpn: 2\n2=\nrpn: \n");
    }

    #[test]
    fn quiet_prints_display_only() {
        assert_eq!(run("3 4 +\n2 ×\n", &quiet()), "7\n14\n");
    }

    #[test]
    fn state_carries_across_lines() {
        assert_eq!(run("5\n3\n−\n", &quiet()), "5\n3\n2\n");
    }

    #[test]
    fn blank_line_repeats_state() {
        assert_eq!(run("9\n\n", &quiet()), "9\n9\n");
    }

    #[test]
    fn missing_result_prints_blank() {
        assert_eq!(run("3 +\n", &SessionConfig::default()), "> \n?+3=\n> \n");
    }

    #[test]
    fn clear_blanks_display_and_history() {
        assert_eq!(
            run("3\nC\n", &SessionConfig::default()),
            "> 3\n3=\n> \n\n> \n"
        );
    }

    #[test]
    fn error_is_reported_and_session_continues() {
        assert_eq!(
            run("3 % 4\n2 +\n", &quiet()),
            "error: unrecognized input '%' at offset 2\n3\n5\n"
        );
    }

    #[test]
    fn memory_workflow() {
        assert_eq!(
            run("M 2 ×\n3 →M\n", &SessionConfig::default()),
            "> \nM×2=\n> 3\nM×2,3=\n> \n"
        );
    }

    #[test]
    fn no_input() {
        assert_eq!(run("", &SessionConfig::default()), "> \n");
        assert_eq!(run("", &quiet()), "");
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(run("6 2 ÷", &quiet()), "3\n");
    }
}

mod one_shot {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keys_across_arguments() {
        assert_eq!(
            eval(&["3", "4", "+", "2", "*"], &SessionConfig::default()).unwrap(),
            "14\n(3+4)×2=\n"
        );
    }

    #[test]
    fn keys_in_one_argument() {
        assert_eq!(eval(&["5 3 -"], &quiet()).unwrap(), "2\n");
    }

    #[test]
    fn unrecognized_key_is_an_error() {
        let err = eval(&["1", "%"], &quiet()).unwrap_err();
        assert_eq!(err.to_string(), "unrecognized input '%' at offset 2");
    }

    #[test]
    fn session_is_returned() {
        let keys = vec!["2".to_string(), "→x".to_string()];
        let session = eval_to(&keys, &quiet(), &mut Vec::<u8>::new()).unwrap();
        assert_eq!(session.brain().variable_values().get("x"), Some(&2.0));
    }
}

#[test]
fn operator_listing() {
    let mut output = Vec::new();
    write_ops(&mut output, &OpRegistry::builtin()).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "\
symbol kind     arity precedence
+      binary   2     0
cos    unary    1     max
sin    unary    1     max
×      binary   2     1
÷      binary   2     1
π      constant 0     max
−      binary   2     0
√      unary    1     max
"
    );
}
