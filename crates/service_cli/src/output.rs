//! Output formatting utilities
//!
//! Renderers return a `String` so that commands stay testable; `main`
//! writes the result to stdout.

use serde::Serialize;

use crate::Result;

/// Box-drawn text table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Two-column field/value table.
    pub fn key_value<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut table = Self::new(&["Field", "Value"]);
        for (key, value) in pairs {
            table.push_row(vec![key.to_string(), value]);
        }
        table
    }

    /// Appends a row; missing cells render empty.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Renders the table.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .chain(std::iter::once(&self.headers[col]))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&border(&widths, '┌', '┬', '┐'));
        out.push_str(&line(&widths, &self.headers));
        out.push_str(&border(&widths, '├', '┼', '┤'));
        if self.rows.is_empty() {
            let empty = vec!["(no data)".to_string()];
            out.push_str(&line(&widths, &empty));
        }
        for row in &self.rows {
            out.push_str(&line(&widths, row));
        }
        out.push_str(&border(&widths, '└', '┴', '┘'));
        out
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = w.saturating_sub(cell.chars().count());
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect();
    format!("│{}│\n", padded.join("│"))
}

/// Fixed-precision number for table cells.
pub fn fmt_num(x: f64) -> String {
    if x.is_finite() {
        format!("{:.6}", x)
    } else {
        format!("{}", x)
    }
}

/// Pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// CSV with a header row derived from the record fields.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| std::io::Error::other(e).into())
}
