pub mod json;
pub mod stylish;

use crate::findings::Finding;

/// Renders an ordered sequence of findings into one output document.
pub trait Reporter {
    fn report(&self, findings: &[Finding]) -> String;
}
