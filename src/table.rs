//! Aligned plain-text column layout.
//!
//! Widths are measured through a caller-supplied visible-length function,
//! so cells carrying escape sequences line up with bare ones.

/// Horizontal cell separator.
const HSEP: &str = "  ";

/// Column alignment. Columns without an explicit entry are left-aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Lay `rows` out as aligned columns.
///
/// `align` may be shorter than the widest row and rows may be ragged.
/// Every line is trimmed of trailing whitespace; lines are joined with
/// `\n` and there is no trailing newline.
pub fn render<F>(rows: &[Vec<String>], align: &[Align], visible_len: F) -> String
where
    F: Fn(&str) -> usize,
{
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (ix, cell) in row.iter().enumerate() {
            let len = visible_len(cell);
            if ix >= widths.len() {
                widths.push(len);
            } else if len > widths[ix] {
                widths[ix] = len;
            }
        }
    }

    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .enumerate()
                .map(|(ix, cell)| {
                    let pad = " ".repeat(widths[ix].saturating_sub(visible_len(cell)));
                    match align.get(ix).copied().unwrap_or_default() {
                        Align::Left => format!("{cell}{pad}"),
                        Align::Right => format!("{pad}{cell}"),
                    }
                })
                .collect::<Vec<_>>()
                .join(HSEP);
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
