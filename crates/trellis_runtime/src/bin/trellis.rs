//! Trellis CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use trellis_runtime::{ComponentReport, Session};
use trellis_schema::SchemaConfig;

/// CLI configuration parsed from arguments.
#[derive(Default)]
#[allow(clippy::struct_excessive_bools)]
struct CliConfig {
    files: Vec<PathBuf>,
    show_help: bool,
    show_version: bool,
    print_docs: bool,
    json: bool,
    no_docs: bool,
    no_context_check: bool,
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--docs" => config.print_docs = true,
            "--json" => config.json = true,
            "--no-docs" => config.no_docs = true,
            "--no-context-check" => config.no_context_check = true,
            "-q" | "--quiet" => config.quiet = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => config.files.push(PathBuf::from(arg)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("trellis {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.files.is_empty() {
        return Err("no input files (see --help)".into());
    }

    // Warnings are printed below, so the schema layer does not log them too.
    let schema_config = SchemaConfig::default()
        .with_generate_docs(!config.no_docs)
        .with_context_check(!config.no_context_check)
        .with_log_warnings(false);
    let mut session = Session::with_config(schema_config);

    for file in &config.files {
        session.load_file(file)?;
    }

    if !config.quiet {
        for diagnostic in session.diagnostics() {
            eprintln!("\x1b[33m{diagnostic}\x1b[0m");
        }
    }

    let reports: Vec<ComponentReport> = session
        .components()
        .iter()
        .map(ComponentReport::from)
        .collect();

    if config.json {
        println!("{}", ComponentReport::to_json(&reports)?);
    } else if config.print_docs {
        for component in session.components() {
            println!("\x1b[1;36m=== {} ===\x1b[0m", component.name());
            println!("{}", component.doc().unwrap_or(""));
        }
    } else if !config.quiet {
        for report in &reports {
            println!("{}", report.summary());
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTrellis\x1b[0m - Schema checker for component assigns

\x1b[1mUSAGE:\x1b[0m
    trellis [OPTIONS] FILES...

\x1b[1mARGUMENTS:\x1b[0m
    FILES...    .trl files to load, in order

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -q, --quiet           Do not print warnings or summaries
    --docs                Print each component's documentation
    --json                Print a JSON report of every component
    --no-docs             Do not generate property documentation
    --no-context-check    Skip the init_context check

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG              Log filter (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    trellis card.trl                 Check card.trl
    trellis --docs card.trl          Print generated docs
    trellis --json a.trl b.trl       Report two files as JSON"
    );
}
