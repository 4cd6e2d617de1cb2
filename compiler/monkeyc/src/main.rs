//! Monkey lexer CLI
//!
//! `monkey` with no command starts the token REPL.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use monkeyc::commands::{lex_file, run_repl};
use monkeyc::config::CliConfig;
use monkeyc::tracing_setup::init_tracing;
use monkeyc::{CliError, Result};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(
                e,
                CliError::UnknownCommand(_) | CliError::UnknownFlag(_) | CliError::MissingArgument(_)
            ) {
                eprintln!();
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode> {
    // Bare flags go to the REPL: `monkey --spans`
    let (command, rest) = match args.get(1) {
        None => ("repl", &args[args.len()..]),
        Some(arg) if arg.starts_with("--") => ("repl", &args[1..]),
        Some(arg) => (arg.as_str(), &args[2..]),
    };

    match command {
        "repl" => {
            let config = CliConfig::from_args(rest)?;
            let user = std::env::var("USER").unwrap_or_else(|_| "there".to_string());
            println!("Hello {user}! This is the Monkey programming language!");
            println!("Feel free to type in commands");
            run_repl(io::stdin().lock(), io::stdout().lock(), &config)?;
            Ok(ExitCode::SUCCESS)
        }
        "lex" => {
            let (paths, flags): (Vec<String>, Vec<String>) =
                rest.iter().cloned().partition(|a| !a.starts_with("--"));
            let config = CliConfig::from_args(&flags)?;
            let Some(path) = paths.first() else {
                return Err(CliError::MissingArgument("<file>"));
            };
            let summary = lex_file(Path::new(path), &config)?;
            Ok(if summary.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        "help" | "-h" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  monkey [repl] [options]      Echo the tokens of each input line");
    eprintln!("  monkey lex <file> [options]  Print a file's tokens and lex errors");
    eprintln!("  monkey help                  Show this help");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --prompt=<text>              REPL prompt (default: \">> \", env: MONKEY_PROMPT)");
    eprintln!("  --spans                      Show byte spans next to tokens");
    eprintln!("  --color=<when>               auto, always, or never (default: auto)");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=monkey_lexer=trace) for debug logging.");
}
