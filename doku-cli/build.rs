use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the variants and title modes from doku-babel
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_VARIANTS: &[&str] = &["rfc", "basic"];
const AVAILABLE_TITLE_MODES: &[&str] = &["strict", "lenient"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2dw")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown documents to DokuWiki markup")
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
                .help("Path to a doku.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("variant")
                .long("variant")
                .help("Rule table to use")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new("title-mode")
                .long("title-mode")
                .help("How to treat a first line without an RFC title")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_TITLE_MODES))
                .global(true),
        )
        .arg(
            Arg::new("lenient-title")
                .long("lenient-title")
                .help("Do not fail on documents without an RFC title")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("batch")
                .about("Convert every matching file of a directory")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::DirPath),
                )
                .arg(Arg::new("extension").long("extension")),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a single file")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2dw", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2dw", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2dw", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
