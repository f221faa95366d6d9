use std::io::Write;

use clap::ValueEnum;
use prettytable::{Cell, Row, Table};
use serde_json::{Map, Value};

use crate::data::model::ResultTable;
use crate::error::Error;

// ---------------------------------------------------------------------------
// Output formats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered grid, one line per row.
    #[default]
    Grid,
    Csv,
    /// Array of objects keyed by header.
    Json,
}

/// Write `table` to `out` in the requested format.
pub fn render(
    table: &ResultTable,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), Error> {
    match format {
        OutputFormat::Grid => render_grid(table, out),
        OutputFormat::Csv => render_csv(table, out),
        OutputFormat::Json => render_json(table, out),
    }
}

fn render_grid(table: &ResultTable, out: &mut impl Write) -> Result<(), Error> {
    let mut grid = Table::new();
    grid.set_titles(Row::new(table.headers().iter().map(|h| Cell::new(h)).collect()));
    for cells in table.cells() {
        grid.add_row(Row::new(cells.iter().map(|c| Cell::new(c)).collect()));
    }
    grid.print(out).map_err(|e| Error::Render(e.to_string()))?;
    Ok(())
}

fn render_csv(table: &ResultTable, out: &mut impl Write) -> Result<(), Error> {
    // Records reach `out` whenever the writer's buffer fills, so every call
    // here can surface an output failure.
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(table.headers())
        .map_err(|e| Error::Render(e.to_string()))?;
    for cells in table.cells() {
        writer
            .write_record(&cells)
            .map_err(|e| Error::Render(e.to_string()))?;
    }
    writer.flush().map_err(|e| Error::Render(e.to_string()))
}

fn render_json(table: &ResultTable, out: &mut impl Write) -> Result<(), Error> {
    let records: Vec<Value> = match table {
        ResultTable::Rows { headers, rows } => rows
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned().map(Value::String))
                    .collect();
                Value::Object(obj)
            })
            .collect(),
        ResultTable::Scalar { function, value } => {
            let mut obj = Map::new();
            obj.insert(function.name().to_string(), scalar_json(*value));
            vec![Value::Object(obj)]
        }
    };

    serde_json::to_writer_pretty(&mut *out, &records)
        .map_err(|e| Error::Render(e.to_string()))?;
    writeln!(out).map_err(|e| Error::Render(e.to_string()))
}

/// Whole numbers stay integers so `1199` does not print as `1199.0`.
fn scalar_json(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
