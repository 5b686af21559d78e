use clap::Parser;
use lintfmt::cli::ColorChoice;
use lintfmt::findings::Summary;
use lintfmt::{Cli, OutputFormatter, input};
use std::fs;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    run(&cli)
}

fn run(cli: &Cli) -> ExitCode {
    info!(input = ?cli.input, "Rendering report");

    let findings = match input::load(cli.input.as_deref()) {
        Ok(findings) => findings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let summary = Summary::from_findings(&findings);
    let report = OutputFormatter::new(cli.format)
        .with_color(cli.color.enabled())
        .render(&findings);

    // An empty report must stay empty, so the report is written as-is with
    // no added trailing newline.
    if let Some(ref output_path) = cli.output {
        match fs::write(output_path, &report) {
            Ok(()) => {
                println!("Report written to {}", output_path.display());
            }
            Err(e) => {
                eprintln!("Failed to write report to {}: {}", output_path.display(), e);
                return ExitCode::from(2);
            }
        }
    } else {
        print!("{}", report);
    }

    debug!(
        errors = summary.errors,
        warnings = summary.warnings,
        findings = findings.len(),
        "Report rendered"
    );

    if summary.errors > 0 || (cli.strict && summary.warnings > 0) {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
