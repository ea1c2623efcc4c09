//! Grid tables
//!
//! Pandoc grid tables are drawn with `+`, `-`, `=` and `|`. Cells may hold
//! any inline markdown, so they are the format used for summary tables.

use std::fmt::Write;

/// Grid table renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridTable {
    /// Column headers, if any
    headers: Option<Vec<String>>,
    /// Column widths
    widths: Vec<usize>,
    /// Row data
    rows: Vec<Vec<String>>,
}

impl GridTable {
    /// Create a table with a header row
    pub fn with_headers(headers: Vec<impl Into<String>>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let widths = headers.iter().map(|h| cell_width(h)).collect();
        Self {
            headers: Some(headers),
            widths,
            rows: Vec::new(),
        }
    }

    /// Create a table without a header row
    pub fn headless() -> Self {
        Self::default()
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<impl Into<String>>) {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        for (i, cell) in row.iter().enumerate() {
            let width = cell_width(cell);
            match self.widths.get_mut(i) {
                Some(w) => *w = (*w).max(width),
                None => self.widths.push(width),
            }
        }
        self.rows.push(row);
    }

    /// Number of body rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table to a string
    pub fn render(&self) -> String {
        let mut output = String::new();
        if self.widths.is_empty() {
            return output;
        }

        output.push_str(&self.rule('-'));
        if let Some(headers) = &self.headers {
            output.push_str(&self.row(headers));
            output.push_str(&self.rule('='));
        }
        for row in &self.rows {
            output.push_str(&self.row(row));
            output.push_str(&self.rule('-'));
        }
        // A header-only table still needs its closing border
        if self.rows.is_empty() && self.headers.is_some() {
            output.truncate(output.len() - self.rule('=').len());
            output.push_str(&self.rule('-'));
        }

        output
    }

    fn rule(&self, fill: char) -> String {
        let mut line = String::from("+");
        for width in &self.widths {
            for _ in 0..(*width + 2) {
                line.push(fill);
            }
            line.push('+');
        }
        line.push('\n');
        line
    }

    fn row(&self, cells: &[String]) -> String {
        let mut line = String::from("|");
        for (i, width) in self.widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell_width(cell));
            write!(line, " {}{} |", cell, " ".repeat(pad)).ok();
        }
        line.push('\n');
        line
    }
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}
