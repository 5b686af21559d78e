#[cfg(test)]
pub mod fixtures {
    use crate::findings::{Finding, Severity};

    pub fn finding(
        level: Severity,
        header: &str,
        column: usize,
        message: &str,
        rule_id: &str,
    ) -> Finding {
        Finding::new(level, message)
            .with_header(header)
            .with_column(column)
            .with_rule_id(rule_id)
    }

    pub fn error_finding() -> Finding {
        finding(Severity::Error, "app.js", 5, "Missing semicolon.", "semi")
    }

    pub fn warning_finding() -> Finding {
        finding(
            Severity::Warn,
            "app.js",
            10,
            "Unused variable.",
            "no-unused-vars",
        )
    }
}
