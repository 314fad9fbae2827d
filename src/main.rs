//! Coded Errors CLI
//!
//! Usage:
//!   coded-errors [OPTIONS] <CODE>
//!
//! Options:
//!   -m, --message <TEXT>        Message text with {{placeholders}}
//!   -a, --arg <VALUE>           Positional argument for the message placeholders
//!   -p, --param <NAME=VALUE>    Named parameter
//!   -u, --unquoted <NAME=VALUE> Named parameter rendered without quotes
//!       --mitigation <TEXT>     Mitigation (repeatable)
//!       --ticket                Add the ticket mitigation
//!   -s, --settings <FILE>       Settings file (TOML format)
//!       --check                 Report placeholders without a value
//!       --trace                 Trace binding and resolution to stderr
//!   -h, --help                  Print help

use std::path::PathBuf;

use clap::Parser;

use coded_errors::{message_builder_with_settings, Arguments, Settings, Value};

#[derive(Parser)]
#[command(name = "coded-errors")]
#[command(about = "Format code-prefixed error messages")]
struct Cli {
    /// Error code, e.g. E-APP-12
    code: String,

    /// Message text with {{placeholders}}
    #[arg(short, long)]
    message: Option<String>,

    /// Positional argument for the message placeholders (repeatable)
    #[arg(short, long = "arg")]
    args: Vec<String>,

    /// Named parameter as NAME=VALUE (repeatable)
    #[arg(short, long = "param", value_parser = parse_binding)]
    params: Vec<(String, String)>,

    /// Named parameter rendered without quotes, as NAME=VALUE (repeatable)
    #[arg(short, long = "unquoted", value_parser = parse_binding)]
    unquoted: Vec<(String, String)>,

    /// Mitigation text (repeatable)
    #[arg(long = "mitigation")]
    mitigations: Vec<String>,

    /// Add the ticket mitigation after the other mitigations
    #[arg(long)]
    ticket: bool,

    /// Settings file (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Report placeholders without a value and exit with status 1 if any
    #[arg(long)]
    check: bool,

    /// Trace binding and resolution to stderr
    #[arg(long)]
    trace: bool,
}

fn parse_binding(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))
}

/// Read a command-line value as a number or boolean when it looks like one
fn infer_value(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i128>() {
        return Value::Integer(n);
    }
    if let Ok(x) = raw.parse::<f64>() {
        if x.is_finite() {
            return Value::Float(x);
        }
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::from(raw),
    }
}

fn main() {
    let cli = Cli::parse();

    // Load settings
    let settings = match &cli.settings {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    let settings = if cli.trace {
        settings.with_trace(true)
    } else {
        settings
    };

    let mut builder = message_builder_with_settings(&cli.code, settings);
    if let Some(message) = &cli.message {
        let arguments = Arguments::List(cli.args.iter().map(|a| infer_value(a)).collect());
        builder = builder.message_with(message, arguments);
    }
    for (name, value) in &cli.params {
        builder = builder.parameter(name, infer_value(value));
    }
    for (name, value) in &cli.unquoted {
        builder = builder.unquoted_parameter(name, infer_value(value));
    }
    for mitigation in &cli.mitigations {
        builder = builder.mitigation(mitigation);
    }
    if cli.ticket {
        builder = builder.ticket_mitigation();
    }

    println!("{}", builder);

    if cli.check {
        let unresolved = builder.unresolved_placeholders();
        for issue in &unresolved {
            match issue.format(&cli.code) {
                Ok(report) => eprint!("{}", report),
                Err(_) => eprintln!("Warning: {}", issue),
            }
        }
        if !unresolved.is_empty() {
            std::process::exit(1);
        }
    }
}
