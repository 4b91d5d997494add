//! Table rendering utilities for CLI outputs.
//!
//! Works like a tab writer: every column except the last is padded to the
//! widest cell of that column plus a fixed gap, the last column is written
//! as-is. Widths are measured in terminal columns, not bytes.

use unicode_width::UnicodeWidthStr;

const PADDING: usize = 3;

pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![header.into_iter().map(Into::into).collect()],
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();

        for row in &self.rows {
            // last cell of a row never constrains a column
            let aligned = row.len().saturating_sub(1);
            for (i, cell) in row.iter().take(aligned).enumerate() {
                let w = UnicodeWidthStr::width(cell.as_str());
                if i >= widths.len() {
                    widths.push(w);
                } else if w > widths[i] {
                    widths[i] = w;
                }
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for row in &self.rows {
            let mut line = String::new();
            let last = row.len().saturating_sub(1);

            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i < last {
                    let w = UnicodeWidthStr::width(cell.as_str());
                    let target = widths.get(i).copied().unwrap_or(w) + PADDING;
                    line.push_str(&" ".repeat(target.saturating_sub(w)));
                }
            }

            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}
