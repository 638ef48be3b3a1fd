//! LES tokenizer CLI.
//!
//! ```text
//! lesc lex [--json] <file>     print the token stream
//! lesc check <file>...         report lexical errors, exit 1 if any
//! ```

mod commands;

use std::process::ExitCode;

use commands::{check_files, lex_file};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let result = match command.as_str() {
        "lex" => {
            let json = args.iter().skip(2).any(|a| a == "--json");
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("Usage: lesc lex [--json] <file>");
                return ExitCode::FAILURE;
            };
            lex_file(path, json)
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: lesc check <file>...");
                return ExitCode::FAILURE;
            }
            check_files(&args[2..])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "version" | "--version" | "-V" => {
            println!("lesc {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Install a fmt subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=les_lexer=debug` (errors) or
/// `RUST_LOG=les_lexer=trace` (every token).
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}

fn print_usage() {
    println!("LES tokenizer");
    println!();
    println!("Usage: lesc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex [--json] <file>   Tokenize a file and print the tokens");
    println!("  check <file>...       Report lexical errors (exit 1 if any)");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
}
