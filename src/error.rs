use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintfmtError {
    #[error("Failed to read findings file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read findings from stdin")]
    Stdin(#[source] std::io::Error),

    #[error("Invalid findings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LintfmtError>;
