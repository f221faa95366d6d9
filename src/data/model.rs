use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::expr::{AggregateFunc, CompareOp};

// ---------------------------------------------------------------------------
// CellValue – a single cell, coerced for comparison
// ---------------------------------------------------------------------------

/// A cell interpreted leniently: a number when the text parses as one,
/// otherwise the original text.
///
/// Only ever built transiently for comparisons; rows keep their string form.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Best-effort coercion. Never fails: unparsable input stays text.
    pub fn coerce(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }

    /// Apply `op` with `self` on the left.
    ///
    /// Returns `None` when the two values cannot be ordered against each
    /// other (a number and a text under `>` / `<`). Equality between
    /// different kinds is simply `false`.
    pub fn compare(&self, op: CompareOp, other: &CellValue) -> Option<bool> {
        use CellValue::*;
        let ordering = match (self, other) {
            (Number(a), Number(b)) => a.partial_cmp(b),
            (Text(a), Text(b)) => Some(a.cmp(b)),
            _ if op == CompareOp::Equal => return Some(false),
            _ => return None,
        };
        // NaN on either side orders as nothing, so it never matches.
        Some(match op {
            CompareOp::Equal => ordering == Some(Ordering::Equal),
            CompareOp::GreaterThan => ordering == Some(Ordering::Greater),
            CompareOp::LessThan => ordering == Some(Ordering::Less),
        })
    }
}

/// Strict numeric conversion: the whole (trimmed) cell must be a float.
///
/// Deliberately separate from [`CellValue::coerce`]; aggregation must fail
/// loudly where filtering falls back to text.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Row / Dataset – the loaded table
// ---------------------------------------------------------------------------

/// One CSV record: column name → cell text exactly as read.
pub type Row = BTreeMap<String, String>;

/// The full loaded file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in file order.
    pub headers: Vec<String>,
    /// All records, in file order.
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow every row, in order.
    pub fn all_rows(&self) -> Vec<&Row> {
        self.rows.iter().collect()
    }

    /// Lay the given rows out in header order as plain string cells.
    pub fn project(&self, rows: &[&Row]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| {
                self.headers
                    .iter()
                    .map(|h| row.get(h).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// ResultTable – what one query hands back
// ---------------------------------------------------------------------------

/// Either the (filtered) rows, or a single aggregated number.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultTable {
    Rows {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Scalar {
        function: AggregateFunc,
        /// Already rounded to 2 decimals.
        value: f64,
    },
}

impl ResultTable {
    /// Header labels: the source columns, or just the function name.
    pub fn headers(&self) -> Vec<String> {
        match self {
            ResultTable::Rows { headers, .. } => headers.clone(),
            ResultTable::Scalar { function, .. } => vec![function.name().to_string()],
        }
    }

    /// Cells as strings, row by row.
    pub fn cells(&self) -> Vec<Vec<String>> {
        match self {
            ResultTable::Rows { rows, .. } => rows.clone(),
            ResultTable::Scalar { value, .. } => vec![vec![value.to_string()]],
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            ResultTable::Rows { rows, .. } => rows.len(),
            ResultTable::Scalar { .. } => 1,
        }
    }

    pub fn scalar(&self) -> Option<f64> {
        match self {
            ResultTable::Scalar { value, .. } => Some(*value),
            ResultTable::Rows { .. } => None,
        }
    }
}
