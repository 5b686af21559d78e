use serde::Serialize;

use crate::findings::{Finding, Summary};
use crate::reporter::Reporter;

/// Wire shape of the JSON report: a severity tally followed by the findings
/// exactly as they were parsed, messages untouched.
#[derive(Serialize)]
struct JsonReport<'a> {
    summary: JsonSummary,
    findings: &'a [Finding],
}

#[derive(Serialize)]
struct JsonSummary {
    errors: usize,
    warnings: usize,
    total: usize,
}

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, findings: &[Finding]) -> String {
        let summary = Summary::from_findings(findings);
        let report = JsonReport {
            summary: JsonSummary {
                errors: summary.errors,
                warnings: summary.warnings,
                total: summary.total(),
            },
            findings,
        };
        serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e))
    }
}
