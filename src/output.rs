//! Selects the reporter that matches the requested output format.

use crate::cli::OutputFormat;
use crate::findings::Finding;
use crate::reporter::{Reporter, json::JsonReporter, stylish::StylishReporter};

/// Unified output formatter that selects the appropriate reporter.
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    /// Create a new output formatter. Color starts disabled.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    /// Enable or disable ANSI styling for the stylish report.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render the findings to a string.
    pub fn render(&self, findings: &[Finding]) -> String {
        match self.format {
            OutputFormat::Stylish => {
                if self.color {
                    let reporter = StylishReporter::new();
                    reporter.report(findings)
                } else {
                    let reporter = StylishReporter::plain();
                    reporter.report(findings)
                }
            }
            OutputFormat::Json => {
                let reporter = JsonReporter::new();
                reporter.report(findings)
            }
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Stylish)
    }
}
