//! aligndiff CLI
//!
//! Checks a document-aligner score file against a reference run. Exits 0 when
//! every line pair matches, 1 when any pair differs, 2 on error.

#![warn(missing_docs)]
#![warn(clippy::all)]

use aligndiff_core::{CompareConfig, CompareReport, LineComparator, RawLines, Tolerance};
use clap::{ArgAction, Parser};
use color_eyre::Result;
use color_eyre::config::{HookBuilder, Theme};
use color_eyre::eyre::WrapErr;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

/// At least one line pair differed
const EXIT_DIFFERENT: u8 = 1;
/// Bad arguments, unreadable input or malformed row
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "aligndiff")]
#[command(
    about = "Compare two document-aligner score files within a score tolerance",
    long_about = None
)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Maximum allowed absolute score difference
    max_diff: Tolerance,
    /// First score file
    path1: PathBuf,
    /// Second score file
    path2: PathBuf,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Write a JSON comparison report to this file
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> CompareConfig {
        CompareConfig::with_tolerance(self.max_diff)
    }
}

fn main() -> ExitCode {
    if let Err(err) = HookBuilder::default()
        .theme(Theme::new())
        .display_env_section(false)
        .install()
    {
        eprintln!("Error: {:?}", err);
        return ExitCode::from(EXIT_ERROR);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) if report.passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_DIFFERENT),
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("aligndiff={level},aligndiff_core={level}"))
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<CompareReport> {
    let left = open_lines(&cli.path1)?;
    let right = open_lines(&cli.path2)?;

    let comparator = LineComparator::new(cli.config());
    let report = comparator.compare(left, right, &mut io::stderr().lock())?;

    if let Some(path) = &cli.report {
        write_report(path, &report)?;
    }

    Ok(report)
}

fn open_lines(path: &Path) -> Result<RawLines<BufReader<File>>> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    debug!(path = %path.display(), "opened input");
    Ok(RawLines::new(BufReader::new(file)))
}

fn write_report(path: &Path, report: &CompareReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).wrap_err("failed to encode report")?;
    fs::write(path, json).wrap_err_with(|| format!("failed to write report {}", path.display()))?;
    debug!(path = %path.display(), "wrote report");
    Ok(())
}
