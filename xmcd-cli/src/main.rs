//! Command-line Mathcad to LaTeX converter
//!
//! Usage:
//!   xmcdtex <path> [--output-dir <dir>] [--config <file>] [--verbose] [--diagnostics <fmt>]
//!
//! Reads one `.xmcd` worksheet, writes `<stem>.tex` into the output
//! directory, and reports any regions that had to be skipped on stderr.
//! Skipped regions are best-effort losses, not failures: the exit code is
//! nonzero only when no document could be produced at all.

use clap::{Arg, ArgAction, Command};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("xmcdtex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Mathcad worksheets (.xmcd) to LaTeX documents")
        .arg(
            Arg::new("path")
                .help("Path to the .xmcd worksheet")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .help("Directory for the generated .tex file (overrides config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("diagnostics")
                .long("diagnostics")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("How to report skipped regions on stderr"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Print per-region progress notes"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let diagnostics = matches
        .get_one::<String>("diagnostics")
        .expect("has a default");

    let config = load_config(&matches);
    run(Path::new(path), &config, diagnostics);
}

fn load_config(matches: &clap::ArgMatches) -> xmcd_config::XmcdConfig {
    let mut loader = xmcd_config::Loader::new();
    loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader.with_optional_file("xmcdtex.toml"),
    };
    if let Some(dir) = matches.get_one::<String>("output-dir") {
        loader = loader
            .set_override("convert.output_dir", dir.clone())
            .unwrap_or_else(|e| fatal(&format!("Configuration error: {}", e)));
    }
    if matches.get_flag("verbose") {
        loader = loader
            .set_override("convert.verbose", true)
            .unwrap_or_else(|e| fatal(&format!("Configuration error: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fatal(&format!("Configuration error: {}", e)))
}

fn run(path: &Path, config: &xmcd_config::XmcdConfig, diagnostics: &str) {
    if path.extension().and_then(OsStr::to_str) != Some("xmcd") {
        fatal(&format!(
            "Input must be a .xmcd (Mathcad) worksheet: {}",
            path.display()
        ));
    }

    let source = fs::read_to_string(path)
        .unwrap_or_else(|e| fatal(&format!("Could not read {}: {}", path.display(), e)));

    let assembly = xmcd_latex::convert(&source, config.convert.verbose)
        .unwrap_or_else(|e| fatal(&format!("Could not convert {}: {}", path.display(), e)));

    for note in &assembly.notes {
        eprintln!("{}", note);
    }
    report_failures(&assembly.failures, diagnostics);

    let out_dir = Path::new(&config.convert.output_dir);
    fs::create_dir_all(out_dir)
        .unwrap_or_else(|e| fatal(&format!("Could not create {}: {}", out_dir.display(), e)));
    let stem = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("worksheet");
    let out_path = out_dir.join(format!("{}.tex", stem));
    fs::write(&out_path, assembly.latex.as_bytes())
        .unwrap_or_else(|e| fatal(&format!("Could not write {}: {}", out_path.display(), e)));

    if assembly.failures.is_empty() {
        println!("Wrote {}", out_path.display());
    } else {
        println!(
            "Wrote {} ({} region(s) skipped)",
            out_path.display(),
            assembly.failures.len()
        );
    }
}

fn report_failures(failures: &[xmcd_latex::RegionFailure], diagnostics: &str) {
    if failures.is_empty() {
        return;
    }
    if diagnostics == "json" {
        let json = serde_json::to_string_pretty(failures)
            .unwrap_or_else(|e| fatal(&format!("Could not serialize diagnostics: {}", e)));
        eprintln!("{}", json);
    } else {
        for failure in failures {
            eprintln!("could not render {}", failure);
        }
    }
}

fn fatal(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
