//! Calc - RPN calculator on the command line.

use calcr::commands::{list_ops, run_eval, run_repl};
use calcr::{init_tracing, parse_args, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let (command, config) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let code = match command {
        Command::Repl => run_repl(&config),
        Command::Eval(keys) => run_eval(&keys, &config),
        Command::Ops => list_ops(),
        Command::Help => {
            print_usage();
            0
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    println!("Calc {} (RPN calculator)", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: calc [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Read keys line by line from stdin (default)");
    println!("  eval <keys...>       Press the given keys once and print the result");
    println!("  ops                  List the built-in operators");
    println!("  help                 Show this help message");
    println!();
    println!("Options:");
    println!("  --quiet              Print only the displayed value");
    println!("  --prompt=<text>      Prompt for interactive input (default: \"> \")");
    println!();
    println!("Keys:");
    println!("  12  3.5  .5  1e3     Push a number");
    println!("  × ÷ + −  (* / + -)   Binary operators");
    println!("  √ sin cos  (sqrt)    Unary operators");
    println!("  π  (pi)              Push pi");
    println!("  M, x, total          Push a variable reference");
    println!("  →M  (->M)            Store the displayed value in M");
    println!("  C  (clear)           Clear the stack and all variables");
    println!("  =                    Show the current value");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=calc_eval=trace");
    println!("  CALC_LOG_TREE        Print spans as an indented tree");
    println!();
    println!("Examples:");
    println!("  calc eval 3 4 + 2 '*'        # 14, history (3+4)×2=");
    println!("  calc eval 5 3 -              # 2");
    println!("  calc --quiet < keys.txt");
}
