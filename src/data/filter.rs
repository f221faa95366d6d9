use log::{debug, trace};

use super::expr::FilterPredicate;
use super::model::{CellValue, Dataset, Row};
use crate::error::Error;

// ---------------------------------------------------------------------------
// Filter evaluation
// ---------------------------------------------------------------------------

/// Return the rows matching `predicate`, in their original order.
///
/// A row passes when its cell, coerced with [`CellValue::coerce`], compares
/// true against the coerced literal. Rows whose cell cannot be ordered
/// against the literal (number vs. text under `>` / `<`) are skipped rather
/// than reported.
pub fn apply_filter<'a>(
    dataset: &'a Dataset,
    predicate: &FilterPredicate,
) -> Result<Vec<&'a Row>, Error> {
    if !dataset.has_column(&predicate.column) {
        return Err(Error::filter(format!(
            "column \"{}\" not found in file",
            predicate.column
        )));
    }

    let literal = CellValue::coerce(&predicate.literal);
    let matched: Vec<&Row> = dataset
        .rows
        .iter()
        .filter(|row| {
            // A column listed in the header is always present in loaded rows.
            let cell = row.get(&predicate.column).map(String::as_str).unwrap_or("");
            match CellValue::coerce(cell).compare(predicate.op, &literal) {
                Some(hit) => hit,
                None => {
                    trace!("skipping {cell:?}: not comparable with {literal:?}");
                    false
                }
            }
        })
        .collect();

    debug!(
        "filter {predicate} matched {} of {} rows",
        matched.len(),
        dataset.len()
    );
    Ok(matched)
}
