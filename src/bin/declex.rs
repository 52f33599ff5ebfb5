//! Command-line interface for declex
//!
//! Usage:
//!   declex tokens `<path>` [--format `<format>`]  - Tokenize a decl source file
//!   declex check `<path>`                         - Validate a decl source file
//!
//! Both subcommands take the source file path as their single positional
//! argument and exit 0 on success, 1 on any failure.

use clap::{Arg, Command};
use declex::{report, tokenizer, validator};

fn main() {
    let matches = Command::new("declex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenizer and structural validator for decl source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a source file and print the token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the decl source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('plain' or 'json')")
                        .default_value("plain"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a source file against the surface grammar")
                .arg(
                    Arg::new("path")
                        .help("Path to the decl source file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let source = read_source(path);
    match tokenizer::tokenize(&source) {
        Ok(stream) => match format {
            "plain" => print!("{}", report::render_token_dump(&stream)),
            "json" => match report::render_token_json(&stream) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown format: {}", other);
                std::process::exit(1);
            }
        },
        Err(error) => {
            print!("{}", report::render_lex_failure(&error));
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = read_source(path);
    let outcome = validator::validate(&source);
    print!("{}", report::render_validation(&outcome));
    if !outcome.accepted {
        std::process::exit(1);
    }
}
