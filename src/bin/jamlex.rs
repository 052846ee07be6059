//! Command-line interface for jam-lex
//! Tokenizes a Jam / B2 file and prints the token stream in one of the output formats.
//!
//! Usage:
//!   jamlex `<path>` [--format `<format>`] [--config `<file>`]  - Tokenize a file ('-' or none reads stdin)
//!   jamlex --list-formats                                  - List available output formats
//!   jamlex --metadata                                      - Print the lexer registration metadata

use clap::{Arg, ArgAction, Command};
use jam_lex::jam::config::{JamlexConfig, Loader};
use jam_lex::jam::error::{Error, Result};
use jam_lex::jam::formats::{render, OutputFormat, OUTPUT_FORMATS};
use jam_lex::jam::lexing::tokenize_all;
use jam_lex::jam::metadata::{find_lexer_for_filename, JAM};
use std::io::Read;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("jamlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize Jam / B2 build files")
        .arg(
            Arg::new("path")
                .help("Path to the Jam file ('-' reads standard input)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (tag, json, yaml, html, text); defaults to the configured one"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file, layered over ./jamlex.toml and the built-in defaults"),
        )
        .arg(
            Arg::new("offsets")
                .long("offsets")
                .help("Show byte ranges in the tag listing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("metadata")
                .long("metadata")
                .help("Print the lexer metadata as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let result = load_config(
        matches.get_one::<String>("config").map(String::as_str),
        matches.get_one::<String>("format").map(String::as_str),
        matches.get_flag("offsets"),
    )
    .and_then(|config| {
        init_tracing(&config.log.level);
        if matches.get_flag("metadata") {
            handle_metadata_command()
        } else {
            let path = matches
                .get_one::<String>("path")
                .map(String::as_str)
                .unwrap_or("-");
            handle_tokenize_command(path, &config)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>, format: Option<&str>, offsets: bool) -> Result<JamlexConfig> {
    let mut loader = Loader::new().with_project_file(std::env::current_dir()?);
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        // validate here so a typo reports the format, not a deserialization failure
        let format: OutputFormat = format.parse()?;
        loader = loader.set_override("output.format", format.name())?;
    }
    if offsets {
        loader = loader.set_override("tag.show_offsets", true)?;
    }
    loader.build()
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    if find_lexer_for_filename(path).is_none() {
        warn!(path, "file name is not one of {:?}", JAM.filenames);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn handle_tokenize_command(path: &str, config: &JamlexConfig) -> Result<()> {
    let source = read_source(path)?;
    let tokens = tokenize_all(&source);
    info!(
        path,
        bytes = source.len(),
        tokens = tokens.len(),
        "tokenized"
    );
    let format = config.output.format;
    debug!(%format, "rendering");
    let output = render(&tokens, format, config)?;
    print!("{}", output);
    Ok(())
}

fn handle_metadata_command() -> Result<()> {
    let json = serde_json::to_string_pretty(&JAM).map_err(Error::from)?;
    println!("{}", json);
    Ok(())
}

fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OUTPUT_FORMATS {
        println!("  {:<6} {}", format.name(), format.description());
    }
}
