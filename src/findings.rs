//! Finding records and their error/warning tally.

use serde::{Deserialize, Serialize};

use crate::style::Color;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
        }
    }

    /// Label shown in report rows. Warnings spell the word out.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One lint result record, as handed over by the producer.
///
/// `header` carries the source locator (a path, or `path:line`), `column`
/// the position inside that line. Both are optional on the wire and default
/// to empty / absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub level: Severity,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rule_id: String,
}

impl Finding {
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            level,
            header: String::new(),
            column: None,
            message: message.into(),
            rule_id: String::new(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = rule_id.into();
        self
    }
}

/// Error and warning counts for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let (errors, warnings) = findings.iter().fold((0, 0), |(e, w), f| match f.level {
            Severity::Error => (e + 1, w),
            Severity::Warn => (e, w + 1),
        });

        Self { errors, warnings }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }

    /// Color family for the summary line: red as soon as a single error is
    /// present, yellow otherwise.
    pub fn color(&self) -> Color {
        if self.errors > 0 {
            Color::Red
        } else {
            Color::Yellow
        }
    }
}
