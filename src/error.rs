use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Error type shared by the data layer and the CLI
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading, filtering or aggregating.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed `--where` expression, unsupported operator or unknown column.
    #[error("{0}")]
    Filter(String),

    /// Malformed `--aggregate` expression, bad column data or unsupported function.
    #[error("{0}")]
    Aggregation(String),

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Numeric conversion failure not covered by the variants above.
    #[error("{0}")]
    Value(String),

    #[error("cannot write output: {0}")]
    Render(String),
}

/// Coarse classification of [`Error`], used for exit codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Filter,
    Aggregation,
    NotFound,
    Io,
    Csv,
    Value,
    Render,
}

impl Error {
    pub fn filter(message: impl Into<String>) -> Self {
        Error::Filter(message.into())
    }

    pub fn aggregation(message: impl Into<String>) -> Self {
        Error::Aggregation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Filter(_) => ErrorKind::Filter,
            Error::Aggregation(_) => ErrorKind::Aggregation,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Io { .. } => ErrorKind::Io,
            Error::Csv(_) => ErrorKind::Csv,
            Error::Value(_) => ErrorKind::Value,
            Error::Render(_) => ErrorKind::Render,
        }
    }

    /// Map an I/O failure on `path`, splitting out the missing-file case.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound { path }
        } else {
            Error::Io { path, source }
        }
    }
}

/// For library callers parsing their own numbers; the pipeline itself
/// reports bad numbers as [`Error::Aggregation`].
impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::Value(err.to_string())
    }
}

/// Exit code for a usage error (bad or missing flags), as clap reports it.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Process exit code for each error kind. Never [`USAGE_EXIT_CODE`].
pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Filter => 3,
        ErrorKind::Aggregation => 4,
        ErrorKind::NotFound => 5,
        ErrorKind::Io => 6,
        ErrorKind::Csv => 7,
        ErrorKind::Value => 8,
        ErrorKind::Render => 9,
    }
}

#[cfg(test)]
mod tests {
    use super::{to_exit_code, Error, ErrorKind, USAGE_EXIT_CODE};

    #[test]
    fn exit_code_mapping_is_stable() {
        let cases = [
            (ErrorKind::Filter, 3),
            (ErrorKind::Aggregation, 4),
            (ErrorKind::NotFound, 5),
            (ErrorKind::Io, 6),
            (ErrorKind::Csv, 7),
            (ErrorKind::Value, 8),
            (ErrorKind::Render, 9),
        ];

        for (kind, code) in cases {
            assert_eq!(to_exit_code(kind), code);
            assert_ne!(code, USAGE_EXIT_CODE, "{kind:?} collides with usage errors");
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Error::from_io(
            "nope.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "file not found: nope.csv");

        let err = Error::from_io(
            "locked.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn float_parse_failure_is_value_error() {
        let err: Error = "4,7".parse::<f64>().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
