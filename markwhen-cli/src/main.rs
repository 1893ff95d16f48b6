//! Command-line interface for markwhen
//! This binary parses a markwhen timeline and prints the resulting document.
//!
//! Usage:
//!   markwhen `<path>` [--format `<format>`] [--config `<file>`]   - Parse a file ("-" for stdin)
//!   markwhen --list-formats                                     - List available output formats
//!
//! Settings come from the embedded defaults, then `./markwhen.toml` if present, then
//! `--config`, then command-line flags.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use markwhen::markwhen::formats::{self, OutputFormat};
use markwhen::parse_reader_with_options;
use markwhen_config::{Loader, MarkwhenConfig};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{debug, info};

const LOCAL_CONFIG: &str = "markwhen.toml";

fn main() {
    let matches = Command::new("markwhen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse markwhen timelines into structured documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the markwhen file, or '-' to read stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (json, yaml, treeviz)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("header-policy")
                .long("header-policy")
                .help("When header fields stop being accepted (leading, anywhere)"),
        )
        .arg(
            Arg::new("date-format")
                .long("date-format")
                .help("Date format of the first page (MM/dd/yy, d/M/y)"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print json on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser activity to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_parse_command(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Default filter is `warn`; `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<MarkwhenConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(policy) = matches.get_one::<String>("header-policy") {
        loader = loader.set_override("parser.header_policy", policy.as_str())?;
    }
    if let Some(alias) = matches.get_one::<String>("date-format") {
        loader = loader.set_override("parser.default_date_format", alias.as_str())?;
    }
    if matches.get_flag("compact") {
        loader = loader.set_override("output.pretty", false)?;
    }
    loader.build().context("invalid configuration")
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    debug!(?config, "loaded configuration");

    let path = matches
        .get_one::<String>("path")
        .context("a path is required")?;

    let parsed = if path == "-" {
        parse_reader_with_options(io::stdin().lock(), config.parser)
    } else {
        let file = File::open(path).with_context(|| format!("cannot open {}", path))?;
        parse_reader_with_options(BufReader::new(file), config.parser)
    };
    let document = parsed.with_context(|| format!("cannot parse {}", path))?;

    info!(
        pages = document.pages.len(),
        events = document.events().count(),
        "parsed {}",
        path
    );

    let output = formats::serialize(&document, config.output.format, config.output.pretty)?;
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::ALL {
        println!("  {}", format);
        println!("    {}", format.description());
        println!();
    }
}
