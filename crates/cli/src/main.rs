// billrecon CLI - batch reconciliation of bill exports
//
// Locates the config and input spreadsheets by filename substring,
// runs each batch entry sequentially, and writes one highlighted
// report per entry. Any failure aborts the whole batch.

mod discover;
mod exit_codes;

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use billrecon_core::{engine, BatchEntry};
use exit_codes::{EXIT_CONFIG, EXIT_INPUT, EXIT_RUNTIME, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "billrecon")]
#[command(about = "Reconcile bill search results against vendor statements")]
#[command(version)]
struct Cli {
    /// Directory holding the config and input spreadsheets
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Config filename pattern (literal substring match)
    #[arg(long, default_value = "config.json")]
    config: String,

    /// Exit immediately on fatal errors instead of waiting for Enter
    #[arg(long)]
    no_pause: bool,
}

/// A CLI failure carrying its exit code.
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

fn cli_err(code: u8, message: impl Into<String>) -> CliError {
    CliError {
        code,
        message: message.into(),
        hint: None,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = &err.hint {
                eprintln!("hint: {hint}");
            }
            if !cli.no_pause {
                wait_for_ack();
            }
            ExitCode::from(err.code)
        }
    }
}

/// Hold the console open so the message survives a double-click
/// launch.
fn wait_for_ack() {
    eprintln!("Press Enter to close...");
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let started = Instant::now();

    let config_path = discover::find_file(&cli.dir, &cli.config)
        .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot list {}: {e}", cli.dir.display())))?
        .ok_or_else(|| CliError {
            code: EXIT_CONFIG,
            message: format!(
                "no config file matching \"{}\" in {}",
                cli.config,
                cli.dir.display()
            ),
            hint: Some(
                "expected a JSON list of {statementFileName, searchFileName, outputFileName} entries"
                    .into(),
            ),
        })?;

    let config_text = std::fs::read_to_string(&config_path).map_err(|e| {
        cli_err(
            EXIT_CONFIG,
            format!("cannot read {}: {e}", config_path.display()),
        )
    })?;
    let entries =
        BatchEntry::parse_list(&config_text).map_err(|e| cli_err(EXIT_CONFIG, e.to_string()))?;

    for entry in &entries {
        process_entry(&cli.dir, entry)?;
    }

    println!();
    println!(
        "Done: {} entr{} in {:.2}s",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn process_entry(dir: &Path, entry: &BatchEntry) -> Result<(), CliError> {
    let locate = |pattern: &str| -> Result<PathBuf, CliError> {
        discover::find_file(dir, pattern)
            .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot list {}: {e}", dir.display())))?
            .ok_or_else(|| {
                cli_err(
                    EXIT_INPUT,
                    format!("no file matching \"{pattern}\" in {}", dir.display()),
                )
            })
    };

    let search_path = locate(&entry.search_file_name)?;
    let statement_path = locate(&entry.statement_file_name)?;

    println!();
    println!("Processing \"{}\"", entry.output_file_name);
    println!("  search file:    {}", search_path.display());
    println!("  statement file: {}", statement_path.display());

    let search_table =
        billrecon_io::xlsx::read_table(&search_path).map_err(|e| cli_err(EXIT_RUNTIME, e))?;
    let statement_table =
        billrecon_io::xlsx::read_table(&statement_path).map_err(|e| cli_err(EXIT_RUNTIME, e))?;

    let report = engine::run(&search_table, &statement_table)
        .map_err(|e| cli_err(EXIT_RUNTIME, e.to_string()))?;

    let summary = &report.summary;
    println!(
        "  {} search records, {} statement records",
        summary.source_records, summary.target_records
    );
    if summary.duplicate_source_refs > 0 {
        eprintln!(
            "  warning: {} duplicate reference number(s) in the search file (last occurrence wins)",
            summary.duplicate_source_refs
        );
    }
    println!(
        "  {} difference row(s): {} mismatched, {} not found",
        report.rows.len(),
        summary.mismatched,
        summary.missing
    );

    let output_path = dir.join(format!("{}.xlsx", entry.output_file_name));
    billrecon_io::report::write_report(&output_path, &report)
        .map_err(|e| cli_err(EXIT_RUNTIME, e))?;
    println!("  wrote {}", output_path.display());

    Ok(())
}
