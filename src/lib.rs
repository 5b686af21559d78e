pub mod cli;
pub mod error;
pub mod findings;
pub mod input;
pub mod output;
pub mod reporter;
pub mod style;
pub mod table;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, ColorChoice, OutputFormat};
pub use error::{LintfmtError, Result};
pub use findings::{Finding, Severity, Summary};
pub use output::OutputFormatter;
pub use reporter::{Reporter, json::JsonReporter, stylish::StylishReporter};
pub use style::{AnsiStyle, Color, PlainStyle, Style};
