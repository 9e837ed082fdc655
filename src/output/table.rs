//! Table formatting for CLI output.
//!
//! Columns are sized to their widest cell, measured in terminal columns so
//! accented and CJK locale names line up. Cells past `max_width` are
//! truncated with an ellipsis.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a column may grow before its cells are truncated.
const DEFAULT_MAX_WIDTH: usize = 60;

/// Column separator.
const GAP: &str = "  ";

/// A simple table formatter.
#[derive(Debug)]
pub struct TableFormatter {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_width: usize,
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self { headers: Vec::new(), rows: Vec::new(), max_width: DEFAULT_MAX_WIDTH }
    }
}

impl TableFormatter {
    /// Create a new table formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column headers.
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Add a row to the table.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Cap every column at `width` terminal columns.
    pub fn max_width(&mut self, width: usize) -> &mut Self {
        self.max_width = width;
        self
    }

    fn widths(&self) -> Vec<usize> {
        let columns =
            self.rows.iter().map(Vec::len).chain(std::iter::once(self.headers.len())).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];

        for row in std::iter::once(&self.headers).chain(&self.rows) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
        widths.iter().map(|w| (*w).min(self.max_width)).collect()
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut output = String::new();

        if !self.headers.is_empty() {
            output.push_str(&render_row(&self.headers, &widths));
            output.push('\n');
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            output.push_str(&rule.join(GAP));
            output.push('\n');
        }

        for row in &self.rows {
            output.push_str(&render_row(row, &widths));
            output.push('\n');
        }

        output
    }
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    let parts: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            let cell_width = UnicodeWidthStr::width(cell.as_str());
            if cell_width > width {
                truncate(cell, width)
            } else if i == last {
                cell.clone()
            } else {
                format!("{cell}{}", " ".repeat(width - cell_width))
            }
        })
        .collect();

    parts.join(GAP)
}

/// Truncate a string to fit within a given width.
fn truncate(s: &str, max_width: usize) -> String {
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width + 3 > max_width {
            out.push_str("...");
            width += 3;
            break;
        }
        out.push(c);
        width += char_width;
    }

    if width < max_width {
        out.push_str(&" ".repeat(max_width - width));
    }
    out
}
