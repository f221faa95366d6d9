use log::debug;

use super::expr::{AggregateFunc, AggregateSpec};
use super::model::{parse_number, Row};
use crate::error::Error;

// ---------------------------------------------------------------------------
// Reducers
// ---------------------------------------------------------------------------

type Reducer = fn(&[f64]) -> f64;

/// Function name → reducer. Inputs are never empty.
const REDUCERS: [(AggregateFunc, Reducer); 3] = [
    (AggregateFunc::Avg, avg),
    (AggregateFunc::Min, min),
    (AggregateFunc::Max, max),
];

fn avg(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Round half away from zero to 2 decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Reduce `spec.column` over `rows` to one rounded number.
///
/// Checks run in a fixed order: unknown column, non-numeric cell, no rows,
/// unsupported function.
pub fn aggregate(
    rows: &[&Row],
    headers: &[String],
    spec: &AggregateSpec,
) -> Result<(AggregateFunc, f64), Error> {
    let column = &spec.column;
    if !headers.iter().any(|h| h == column) {
        return Err(Error::aggregation(format!(
            "column \"{column}\" not found in file"
        )));
    }

    let values = rows
        .iter()
        .map(|row| row.get(column).and_then(|cell| parse_number(cell)))
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| {
            Error::aggregation(format!(
                "column \"{column}\" must contain only numbers to aggregate"
            ))
        })?;

    if values.is_empty() {
        return Err(Error::aggregation("no data to aggregate"));
    }

    let (func, reduce) = REDUCERS
        .iter()
        .find(|(f, _)| f.name() == spec.function)
        .copied()
        .ok_or_else(|| {
            Error::aggregation(format!("aggregate \"{}\" is not supported", spec.function))
        })?;

    let value = round2(reduce(&values));
    debug!("{func}({column}) over {} values = {value}", values.len());
    Ok((func, value))
}
