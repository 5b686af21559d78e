use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Stylish,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether the report should carry ANSI styling.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "lintfmt",
    version,
    about = "Renders lint findings as an aligned, colorized terminal report",
    long_about = "lintfmt reads a JSON array of lint findings and renders it as an aligned report with colored severity labels and a problem summary."
)]
pub struct Cli {
    /// Findings file to read (stdin when omitted)
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Stylish)]
    pub format: OutputFormat,

    /// When to colorize the report
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Strict mode: warnings also fail the exit code
    #[arg(short, long)]
    pub strict: bool,
}
