//! The stylish report: aligned finding rows plus a colored summary line.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::findings::{Finding, Severity, Summary};
use crate::reporter::Reporter;
use crate::style::{AnsiStyle, Color, PlainStyle, Style};
use crate::table::{self, Align};

/// Marker column keeps the default, the header is right-aligned, the column
/// number left-aligned. Everything after that defaults to left.
const ALIGN: [Align; 3] = [Align::Left, Align::Right, Align::Left];

/// A line and a column number rendered side by side, e.g. `12  5`.
static NUMBER_PAIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s+(\d+)").unwrap());

/// A single trailing period preceded by something that is not a period, so
/// `Missing semicolon.` loses the dot while `Unexpected token...` keeps all
/// of them.
static TRAILING_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([^.])\.$").unwrap());

/// Renders findings as aligned rows with severity labels and closes with a
/// bold `✖ N problems` summary, red when any error is present and yellow
/// for warnings only. Empty input renders to the empty string.
///
/// Pure over its input and the injected [`Style`]; calling it twice with
/// the same findings yields the same text.
pub struct StylishReporter<S = AnsiStyle> {
    style: S,
}

impl StylishReporter<AnsiStyle> {
    pub fn new() -> Self {
        Self::with_style(AnsiStyle)
    }
}

impl Default for StylishReporter<AnsiStyle> {
    fn default() -> Self {
        Self::new()
    }
}

impl StylishReporter<PlainStyle> {
    /// Reporter without any styling, for pipes and `--color never`.
    pub fn plain() -> Self {
        Self::with_style(PlainStyle)
    }
}

impl<S: Style> StylishReporter<S> {
    /// Reporter over a caller-supplied styling capability.
    pub fn with_style(style: S) -> Self {
        Self { style }
    }

    fn severity_label(&self, level: Severity) -> String {
        match level {
            Severity::Error => self.style.color(Color::Red, level.label()),
            Severity::Warn => self.style.color(Color::Yellow, level.label()),
        }
    }

    /// Six display cells: marker, header, column, severity label, message,
    /// rule id. Absent columns render as `0`, absent rule ids as an empty
    /// cell.
    fn row(&self, finding: &Finding) -> Vec<String> {
        vec![
            String::new(),
            finding.header.clone(),
            finding.column.unwrap_or(0).to_string(),
            self.severity_label(finding.level),
            strip_trailing_period(&finding.message),
            self.style.dim(&finding.rule_id),
        ]
    }

    /// Rejoin adjacent digit runs as a dimmed `line:column`, first match
    /// per line.
    ///
    /// With the header right-aligned and the column left-aligned, the match
    /// swallows exactly the two-space separator, so every row shortens by
    /// one character at the same spot and the columns to the right stay
    /// aligned.
    fn join_positions(&self, table: &str) -> String {
        table
            .lines()
            .map(|line| {
                NUMBER_PAIR.replace(line, |caps: &Captures| {
                    self.style.dim(&format!("{}:{}", &caps[1], &caps[2]))
                })
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn summary_line(&self, summary: &Summary) -> String {
        let text = format!(
            "   ✖ {} {} ({} {}, {} {})",
            summary.total(),
            pluralize("problem", summary.total()),
            summary.errors,
            pluralize("error", summary.errors),
            summary.warnings,
            pluralize("warning", summary.warnings),
        );
        self.style.bold(&self.style.color(summary.color(), &text))
    }
}

impl<S: Style> Reporter for StylishReporter<S> {
    fn report(&self, findings: &[Finding]) -> String {
        let summary = Summary::from_findings(findings);
        if summary.total() == 0 {
            return String::new();
        }

        let rows: Vec<Vec<String>> = findings.iter().map(|f| self.row(f)).collect();
        let table = table::render(&rows, &ALIGN, |cell| self.style.visible_len(cell));

        let mut output = String::from("\n");
        output.push_str(&self.join_positions(&table));
        output.push_str("\n\n");
        output.push_str(&self.summary_line(&summary));
        output.push('\n');
        output
    }
}

/// Append an `s` unless the count is exactly one. Zero pluralizes.
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

fn strip_trailing_period(message: &str) -> String {
    TRAILING_PERIOD.replace(message, "${1}").into_owned()
}
