//! Immutable in-memory table plus its console rendering.
//!
//! The rendering follows the layout data-frame engines print for `show`:
//! bordered header, right-aligned cells when truncating, `null` for nulls
//! and a trailing note when rows were cut by the limit.


use crate::{schema::Schema, value::Row};
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error as ThisError;

///
/// Constants
///

pub const DEFAULT_SHOW_LIMIT: usize = 20;
pub const DEFAULT_SHOW_TRUNCATE: usize = 20;

const MIN_COLUMN_WIDTH: usize = 3;
const ELLIPSIS: &str = "...";

///
/// DatasetError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DatasetError {
    #[error("row {row} has {found} values, schema has {expected} fields")]
    ArityMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

///
/// Dataset
///
/// Rows are checked for arity against the schema at construction; values
/// are not type-checked.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn try_new(schema: Schema, rows: Vec<Row>) -> Result<Self, DatasetError> {
        let expected = schema.len();

        if let Some((row, found)) = rows
            .iter()
            .map(Row::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(DatasetError::ArityMismatch {
                row,
                expected,
                found,
            });
        }

        Ok(Self { schema, rows })
    }

    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn show_default(&self) -> String {
        self.show(DEFAULT_SHOW_LIMIT, DEFAULT_SHOW_TRUNCATE)
    }

    /// Render at most `limit` rows. With `truncate > 0`, longer cells are
    /// shortened to `truncate` characters and columns are right-aligned;
    /// `truncate == 0` disables truncation and left-aligns.
    #[must_use]
    pub fn show(&self, limit: usize, truncate: usize) -> String {
        let header: Vec<String> = self
            .schema
            .field_names()
            .map(|name| truncate_cell(name, truncate))
            .collect();

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .take(limit)
            .map(|row| {
                row.values()
                    .iter()
                    .map(|value| truncate_cell(&value.to_string(), truncate))
                    .collect()
            })
            .collect();

        let mut widths = vec![MIN_COLUMN_WIDTH; header.len()];
        for line in std::iter::once(&header).chain(&body) {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border = border_line(&widths);
        let right_align = truncate > 0;

        let mut out = String::new();
        out.push_str(&border);
        push_line(&mut out, &header, &widths, right_align);
        out.push_str(&border);
        for line in &body {
            push_line(&mut out, line, &widths, right_align);
        }
        out.push_str(&border);

        if self.rows.len() > limit {
            let noun = if limit == 1 { "row" } else { "rows" };
            let _ = writeln!(out, "only showing top {limit} {noun}");
        }

        out
    }
}

fn truncate_cell(cell: &str, truncate: usize) -> String {
    let len = cell.chars().count();
    if truncate == 0 || len <= truncate {
        return cell.to_string();
    }

    if truncate < 4 {
        cell.chars().take(truncate).collect()
    } else {
        let mut out: String = cell.chars().take(truncate - ELLIPSIS.len()).collect();
        out.push_str(ELLIPSIS);
        out
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.push_str(&"-".repeat(*width));
        out.push('+');
    }
    out.push('\n');

    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], right_align: bool) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        if right_align {
            let _ = write!(out, "{cell:>width$}|");
        } else {
            let _ = write!(out, "{cell:<width$}|");
        }
    }
    out.push('\n');
}
