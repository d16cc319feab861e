//! textmarkup CLI - convert underlined plain-text notes to HTML or QML
//!
//! Usage:
//!   textmarkup [-html | -qml] [-s] [INPUT] [-o OUTPUT]
//!
//! Reads INPUT (or stdin when absent or `-`) and writes to OUTPUT (or stdout).

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use textmarkup::{Mode, Options};

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let matches = command().get_matches_from(normalize_legacy_flags(std::env::args_os()));
    let options = options_from(&matches);
    let input = matches.get_one::<PathBuf>("input");
    let output = matches.get_one::<PathBuf>("output");

    match run(input, output, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("textmarkup: {e}");
            ExitCode::FAILURE
        }
    }
}

fn command() -> Command {
    Command::new("textmarkup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert underlined plain-text notes to HTML or QML markup")
        .arg(
            Arg::new("html")
                .long("html")
                .help("Wrap output in an html document (also accepted as -html)")
                .action(ArgAction::SetTrue)
                .overrides_with("qml"),
        )
        .arg(
            Arg::new("qml")
                .long("qml")
                .help("Wrap output in a <qt> document (also accepted as -qml)")
                .action(ArgAction::SetTrue)
                .overrides_with("html"),
        )
        .arg(
            Arg::new("stringify")
                .short('s')
                .long("stringify")
                .help("Emit each output line as a quoted string literal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write to this file instead of stdout")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("input")
                .help("Input file; stdin when absent or '-'")
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
}

/// Rewrite the single-dash `-html` / `-qml` spellings to their long forms.
fn normalize_legacy_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-html") => OsString::from("--html"),
            Some("-qml") => OsString::from("--qml"),
            _ => arg,
        })
        .collect()
}

fn options_from(matches: &ArgMatches) -> Options {
    let mode = if matches.get_flag("html") {
        Mode::Html
    } else if matches.get_flag("qml") {
        Mode::Qml
    } else {
        Mode::Plain
    };
    Options {
        mode,
        stringify: matches.get_flag("stringify"),
    }
}

fn run(input: Option<&PathBuf>, output: Option<&PathBuf>, options: &Options) -> io::Result<()> {
    let reader: Box<dyn io::BufRead> = match input {
        Some(path) if path.as_os_str() != "-" => {
            log::info!("reading {}", path.display());
            Box::new(BufReader::new(File::open(path).map_err(|e| with_path(e, path))?))
        }
        _ => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn io::Write> = match output {
        Some(path) => {
            log::info!("writing {}", path.display());
            Box::new(BufWriter::new(File::create(path).map_err(|e| with_path(e, path))?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    textmarkup::convert(reader, writer, options).map_err(io::Error::other)
}

fn with_path(err: io::Error, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {err}", path.display()))
}
