// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

mod logging;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use docs_validator::{EXIT_CRASHED, ValidatorConfig, output, validate_fs};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Human,
    Json,
}

/// Check the book's chapters for frontmatter, unclosed code fences and
/// placeholder or corruption markers before publishing.
#[derive(Debug, Parser)]
#[command(name = "docs-validator", version, about)]
struct Cli {
    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config = ValidatorConfig::for_base_dir(std::env::current_dir()?);
    tracing::debug!(root = %config.root.display(), "validating docs");
    let report = validate_fs(&config)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match cli.format {
        Format::Human => output::write_human(&report, &mut stdout.lock(), &mut stderr.lock())?,
        Format::Json => output::write_json(&report, &mut stdout.lock())?,
    }
    Ok(report.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            if output::write_crash(&e, &mut std::io::stderr()).is_err() {
                eprintln!("{} {e:#}", output::CRASHED_HEADER);
            }
            ExitCode::from(EXIT_CRASHED)
        }
    }
}
