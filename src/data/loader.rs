use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::model::{Dataset, Row};
use crate::error::Error;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Knobs for reading a CSV source.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Field separator, `,` by default.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a whole CSV file into memory.
///
/// The first record is the header row. A missing file is reported as
/// [`Error::NotFound`], any other open failure as [`Error::Io`].
pub fn load_csv(path: &Path, options: LoadOptions) -> Result<Dataset, Error> {
    let file = File::open(path).map_err(|e| Error::from_io(path, e))?;
    let dataset = load_reader(file, options)?;
    debug!(
        "loaded {}: {} rows, {} columns",
        path.display(),
        dataset.len(),
        dataset.headers.len()
    );
    Ok(dataset)
}

/// Load CSV from any reader.
///
/// Short records are padded with empty cells; surplus cells are dropped.
pub fn load_reader(source: impl Read, options: LoadOptions) -> Result<Dataset, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(idx, h)| (h.clone(), record.get(idx).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}
