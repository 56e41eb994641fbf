// Command-line interface for doku
//
// This binary converts Markdown files, PHP RFC drafts in particular, to DokuWiki markup.
// The conversion itself lives in the doku-babel crate; configuration loading lives in
// doku-config. This crate only wires arguments, configuration and output together.
//
// Usage:
//  md2dw [batch] [--input <dir>] [--output <dir>]   - Convert every .md file of a directory (default)
//  md2dw convert <file> [--output <file>]           - Convert a single file (stdout by default)
//  md2dw --list-rules [--json]                      - List the rules of the selected variant
//
// Batch mode prints the name of each converted file, one per line, and nothing else on
// stdout. Diagnostics go to stderr through tracing (set RUST_LOG=debug to see every rule
// that fired).

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use doku_babel::{batch, Converter, Rewrite, TitleMode, Variant};
use doku_config::{DokuConfig, Loader};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["batch", "convert", "help"];

// Options followed by a separate value argument
const VALUE_OPTIONS: &[&str] = &[
    "--config",
    "--variant",
    "--title-mode",
    "--input",
    "-i",
    "--output",
    "-o",
    "--extension",
];

fn build_cli() -> Command {
    Command::new("md2dw")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown documents to DokuWiki markup")
        .long_about(
            "md2dw converts Markdown files to DokuWiki markup with an ordered set of\n\
            rewrite rules, tuned for PHP RFC drafts.\n\n\
            Commands:\n  \
            - batch:   Convert every .md file of a directory (default)\n  \
            - convert: Convert a single file\n\n\
            Examples:\n  \
            md2dw                                # Convert ./*.md into ./dokuwiki/\n  \
            md2dw --input rfcs --output wiki     # Convert rfcs/*.md into wiki/\n  \
            md2dw convert rfc.md                 # Print the converted file\n  \
            md2dw --variant basic convert a.md   # Use the basic rule table\n  \
            md2dw --list-rules                   # Show the rules in order"
        )
        .subcommand_required(false)
        .arg(
            Arg::new("list-rules")
                .long("list-rules")
                .help("List the rules of the selected variant in application order")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print --list-rules output as JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a doku.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("variant")
                .long("variant")
                .value_name("NAME")
                .help("Rule table to use: rfc (default) or basic")
                .global(true),
        )
        .arg(
            Arg::new("title-mode")
                .long("title-mode")
                .value_name("MODE")
                .help("How to treat a first line that is not '# PHP RFC: <title>': strict or lenient")
                .global(true),
        )
        .arg(
            Arg::new("lenient-title")
                .long("lenient-title")
                .help("Shorthand for --title-mode lenient")
                .action(ArgAction::SetTrue)
                .conflicts_with("title-mode")
                .global(true),
        )
        .subcommand(
            Command::new("batch")
                .about("Convert every matching file of a directory (default command)")
                .long_about(
                    "Convert every file with the configured extension (md by default) in the\n\
                    input directory. Results are written under the same names into the output\n\
                    directory, which is created if missing. Existing files are overwritten.\n\n\
                    The first failure aborts the run."
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_name("DIR")
                        .help("Directory holding the Markdown files (default: current directory)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .help("Output directory (default: <input>/dokuwiki)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("extension")
                        .long("extension")
                        .value_name("EXT")
                        .help("File extension to convert (default: md)"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a single file")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

/// Insert the default `batch` subcommand when none was given.
///
/// `md2dw --input rfcs` becomes `md2dw batch --input rfcs`. Global-only invocations
/// (`md2dw --list-rules`) and explicit subcommands are left alone. Only the first
/// positional argument counts as a subcommand, so `md2dw -i convert` still means
/// batch over a directory named `convert`.
fn with_default_subcommand(args: Vec<String>) -> Vec<String> {
    let has_subcommand = first_positional(&args)
        .is_some_and(|arg| SUBCOMMANDS.contains(&arg));
    let asks_for_help = args
        .iter()
        .skip(1)
        .any(|arg| matches!(arg.as_str(), "-h" | "--help" | "-V" | "--version"));
    if has_subcommand || asks_for_help || args.is_empty() {
        return args;
    }
    let mut injected = vec![args[0].clone(), "batch".to_string()];
    injected.extend_from_slice(&args[1..]);
    injected
}

/// The first argument that is neither an option nor an option's value.
fn first_positional(args: &[String]) -> Option<&str> {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if arg == "--" {
            return rest.next().map(|s| s.as_str());
        }
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            rest.next();
            continue;
        }
        if arg.starts_with('-') && arg.len() > 1 {
            continue;
        }
        return Some(arg);
    }
    None
}

fn main() {
    init_logging();

    let args = with_default_subcommand(std::env::args().collect());
    let matches = build_cli().get_matches_from(args);

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &matches);
    debug!(
        variant = %config.convert.variant,
        title_mode = %config.convert.title_mode,
        extra_rules = config.rules.extra.len(),
        "configuration loaded"
    );

    let converter = config.build_converter().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if matches.get_flag("list-rules") {
        handle_list_rules_command(&config, &converter, matches.get_flag("json"));
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&converter, input, output);
        }
        Some(("batch", sub_matches)) => {
            apply_batch_overrides(&mut config, sub_matches);
            handle_batch_command(&converter, &config);
        }
        _ => handle_batch_command(&converter, &config),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the batch command: convert a directory, printing each file name
fn handle_batch_command(converter: &Converter, config: &DokuConfig) {
    let options = config.batch_options();
    batch::convert_directory(converter, &options, |name| println!("{name}")).unwrap_or_else(
        |e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    );
}

/// Handle the convert command
fn handle_convert_command(converter: &Converter, input: &str, output: Option<&str>) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let converted = converter.convert(&source).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, converted).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{converted}"),
    }
}

/// Handle the list-rules command
fn handle_list_rules_command(config: &DokuConfig, converter: &Converter, json: bool) {
    let rules = converter.rules();
    if json {
        let listing = serde_json::json!({
            "variant": config.convert.variant.name(),
            "title_mode": converter.title_mode().name(),
            "voting": converter.voting().map(|v| v.snippet_token()),
            "rules": rules
                .rules()
                .map(|rule| serde_json::json!({
                    "name": rule.name(),
                    "description": rule.description(),
                }))
                .collect::<Vec<_>>(),
            "fixups": rules
                .fixups()
                .iter()
                .map(|fixup| serde_json::json!({ "from": fixup.from(), "to": fixup.to() }))
                .collect::<Vec<_>>(),
        });
        match serde_json::to_string_pretty(&listing) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("JSON serialization failed: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "Variant: {} ({})\n",
        config.convert.variant,
        config.convert.variant.description()
    );
    println!("Rules:");
    for (index, rule) in rules.rules().enumerate() {
        println!("  {:>2}. {:<22} {}", index + 1, rule.name(), rule.description());
    }
    if !rules.fixups().is_empty() {
        println!("\nFixups:");
        for fixup in rules.fixups() {
            println!("  {}", fixup.description());
        }
    }
    match converter.voting() {
        Some(voting) => println!("\nVoting snippet: replaces {}", voting.snippet_token()),
        None => println!("\nVoting snippet: disabled"),
    }
    println!("\nAvailable variants:");
    for variant in Variant::ALL {
        println!("  {:<6} {}", variant.name(), variant.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> DokuConfig {
    let loader = Loader::new().with_optional_file("doku.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut DokuConfig, matches: &ArgMatches) {
    if let Some(raw) = matches.get_one::<String>("variant") {
        config.convert.variant = raw.parse::<Variant>().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    }
    if let Some(raw) = matches.get_one::<String>("title-mode") {
        config.convert.title_mode = raw.parse::<TitleMode>().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    }
    if matches.get_flag("lenient-title") {
        config.convert.title_mode = TitleMode::Lenient;
    }
}

fn apply_batch_overrides(config: &mut DokuConfig, matches: &ArgMatches) {
    if let Some(input) = matches.get_one::<String>("input") {
        config.batch.input_dir = PathBuf::from(input);
    }
    if let Some(output) = matches.get_one::<String>("output") {
        config.batch.output_dir = PathBuf::from(output);
    }
    if let Some(extension) = matches.get_one::<String>("extension") {
        config.batch.extension = extension.clone();
    }
}
