//! Command-line interface for pathglob
//! This binary tokenizes and parses glob patterns and prints the result in one of the
//! available formats.
//!
//! Usage:
//!   pathglob `<pattern>`... [--format `<format>`] [--position `<offset>`]
//!   pathglob --format `<format>` < patterns.txt   - one pattern per line from stdin
//!   pathglob --list-formats                        - List all available formats

use clap::{value_parser, Arg, ArgAction, Command};
use pathglob::pattern::processor::{available_formats, process_pattern, ProcessingSpec};
use std::io::BufRead;

fn main() {
    let matches = Command::new("pathglob")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting how glob patterns are tokenized and parsed")
        .arg(
            Arg::new("patterns")
                .help("Patterns to process (read from stdin, one per line, when omitted)")
                .num_args(0..)
                .action(ArgAction::Append)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'token-simple', 'ast-treeviz', 'ast-tag')")
                .default_value("ast-treeviz"),
        )
        .arg(
            Arg::new("position")
                .long("position")
                .short('p')
                .help("Byte offset to inspect with the 'ast-position' format")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_filter = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("ast-treeviz");
    let position = matches.get_one::<usize>("position").copied();

    let patterns: Vec<String> = match matches.get_many::<String>("patterns") {
        Some(values) => values.cloned().collect(),
        None => read_stdin_patterns(),
    };

    handle_process_command(&patterns, format, position);
}

/// Process every pattern, stopping at the first failure
fn handle_process_command(patterns: &[String], format: &str, position: Option<usize>) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for format in available_formats() {
            eprintln!("  {}", format);
        }
        std::process::exit(1);
    });

    for pattern in patterns {
        match process_pattern(pattern, &spec, position) {
            Ok(output) => {
                print!("{}", output);
                if !output.ends_with('\n') {
                    println!();
                }
            }
            Err(e) => {
                eprintln!("Error in pattern {:?}: {}", pattern, e);
                std::process::exit(1);
            }
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}

fn read_stdin_patterns() -> Vec<String> {
    let stdin = std::io::stdin();
    let mut patterns = Vec::new();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => patterns.push(line),
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
        }
    }
    log::debug!("read {} pattern(s) from stdin", patterns.len());
    patterns
}
