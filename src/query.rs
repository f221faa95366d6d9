use std::path::{Path, PathBuf};

use crate::data::aggregate::aggregate;
use crate::data::expr::{parse_aggregate, parse_where};
use crate::data::filter::apply_filter;
use crate::data::loader::{load_csv, LoadOptions};
use crate::data::model::{Dataset, ResultTable};
use crate::error::Error;

// ---------------------------------------------------------------------------
// Query – one invocation of the pipeline
// ---------------------------------------------------------------------------

/// A file plus the optional filter and aggregate expressions to run on it.
///
/// Empty expressions count as absent.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub file: PathBuf,
    pub filter: Option<String>,
    pub aggregate: Option<String>,
}

impl Query {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, expr: impl Into<String>) -> Self {
        self.filter = Some(expr.into());
        self
    }

    pub fn with_aggregate(mut self, expr: impl Into<String>) -> Self {
        self.aggregate = Some(expr.into());
        self
    }

    /// Load the file with default options and evaluate.
    pub fn run(&self) -> Result<ResultTable, Error> {
        self.run_with(LoadOptions::default())
    }

    pub fn run_with(&self, options: LoadOptions) -> Result<ResultTable, Error> {
        let dataset = load_csv(&self.file, options)?;
        self.evaluate(&dataset)
    }

    /// Run filter then aggregate over an already loaded dataset.
    pub fn evaluate(&self, dataset: &Dataset) -> Result<ResultTable, Error> {
        let rows = match non_empty(&self.filter) {
            Some(expr) => apply_filter(dataset, &parse_where(expr)?)?,
            None => dataset.all_rows(),
        };

        if let Some(expr) = non_empty(&self.aggregate) {
            let spec = parse_aggregate(expr)?;
            let (function, value) = aggregate(&rows, &dataset.headers, &spec)?;
            return Ok(ResultTable::Scalar { function, value });
        }

        Ok(ResultTable::Rows {
            headers: dataset.headers.clone(),
            rows: dataset.project(&rows),
        })
    }
}

fn non_empty(expr: &Option<String>) -> Option<&str> {
    expr.as_deref().filter(|e| !e.is_empty())
}

/// Load `path`, filter with `where_expr`, aggregate with `aggregate_expr`.
pub fn process_csv(
    path: &Path,
    where_expr: Option<&str>,
    aggregate_expr: Option<&str>,
) -> Result<ResultTable, Error> {
    Query {
        file: path.to_path_buf(),
        filter: where_expr.map(str::to_string),
        aggregate: aggregate_expr.map(str::to_string),
    }
    .run()
}
