//! Command-line interface for weighted prompts
//! This binary converts prompts between formats, rewrites them canonically and inspects them.
//!
//! Usage:
//!   prompt convert `<path>` [--from `<format>`] [--to `<format>`]  - Convert between formats
//!   prompt format `<path>`                                     - Print the canonical prompt
//!   prompt inspect `<path>`                                    - Print the node tree
//!   prompt check `<path>`                                      - Validate a prompt
//!   prompt list-formats                                      - List all available formats
//!
//! `<path>` may be `-` to read from stdin. `--config <file>` layers a TOML file over the
//! built-in defaults.

mod commands;

use clap::{Arg, ArgMatches, Command};
use commands::Session;

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the prompt file, or '-' for stdin")
        .required(true)
        .index(1)
}

fn from_arg() -> Arg {
    Arg::new("from")
        .long("from")
        .short('f')
        .help("Input format (default: inferred from the file extension)")
}

fn main() {
    let matches = Command::new("prompt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing, converting and inspecting weighted prompts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a prompt between formats")
                .arg(path_arg())
                .arg(from_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Output format (default: convert.to from the configuration)"),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Rewrite a prompt in canonical form")
                .arg(path_arg())
                .arg(from_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the node tree of a prompt")
                .arg(path_arg())
                .arg(from_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a prompt and report its fragment count")
                .arg(path_arg())
                .arg(from_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available formats"))
        .get_matches();

    let session = Session::load(string_arg(&matches, "config")).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = match matches.subcommand() {
        Some(("convert", sub)) => session.convert(
            path(sub),
            string_arg(sub, "from"),
            string_arg(sub, "to"),
        ),
        Some(("format", sub)) => session.format(path(sub), string_arg(sub, "from")),
        Some(("inspect", sub)) => session.inspect(path(sub), string_arg(sub, "from")),
        Some(("check", sub)) => session.check(path(sub), string_arg(sub, "from")),
        Some(("list-formats", _)) => Ok(session.list_formats()),
        _ => unreachable!(),
    };

    match result {
        Ok(output) if output.ends_with('\n') => print!("{}", output),
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn string_arg<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    matches.get_one::<String>(name).map(String::as_str)
}

/// `path` is required on every subcommand that reads it
fn path(matches: &ArgMatches) -> &str {
    string_arg(matches, "path").unwrap_or(commands::STDIN_PATH)
}
