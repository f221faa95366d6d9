//! Parsers for the two query expressions: `--where column<op>value` and
//! `--aggregate column=function`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ---------------------------------------------------------------------------
// Comparison operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,
    GreaterThan,
    LessThan,
}

/// Scan order for operator detection; the first symbol present wins.
const OPERATORS: [(&str, CompareOp); 3] = [
    (">", CompareOp::GreaterThan),
    ("<", CompareOp::LessThan),
    ("=", CompareOp::Equal),
];

/// Two-character operators that look valid but are rejected outright.
const REJECTED_OPERATORS: [&str; 2] = [">=", "<="];

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::GreaterThan => ">",
            CompareOp::LessThan => "<",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// `column <op> literal`. The literal stays raw text until evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPredicate {
    pub column: String,
    pub op: CompareOp,
    pub literal: String,
}

/// Parse a filter condition such as `rating>4.7` or `brand = apple`.
///
/// The operator symbol may appear only once; `>=` and `<=` are refused
/// before single-character scanning so they are never read as `>` / `<`.
pub fn parse_where(input: &str) -> Result<FilterPredicate, Error> {
    if REJECTED_OPERATORS.iter().any(|op| input.contains(op)) {
        return Err(Error::filter("operators >= and <= are not supported"));
    }

    let Some((symbol, op)) = OPERATORS.iter().find(|(sym, _)| input.contains(sym)) else {
        return Err(Error::filter("only the operators =, > and < are supported"));
    };

    let parts: Vec<&str> = input.split(symbol).collect();
    let [column, literal] = parts.as_slice() else {
        return Err(Error::filter(format!(
            "invalid filter condition \"{input}\": expected column{symbol}value"
        )));
    };

    Ok(FilterPredicate {
        column: column.trim().to_string(),
        op: *op,
        literal: literal.trim().to_string(),
    })
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.op, self.literal)
    }
}

// ---------------------------------------------------------------------------
// Aggregate spec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunc {
    Avg,
    Min,
    Max,
}

impl AggregateFunc {
    pub const ALL: [AggregateFunc; 3] = [
        AggregateFunc::Avg,
        AggregateFunc::Min,
        AggregateFunc::Max,
    ];

    /// Look up a function by its lower-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            AggregateFunc::Avg => "avg",
            AggregateFunc::Min => "min",
            AggregateFunc::Max => "max",
        }
    }
}

impl fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `column=function`. The function name is lower-cased but not yet
/// validated; the aggregator checks the column first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub column: String,
    pub function: String,
}

/// Parse an aggregate request such as `rating=avg` or `price = MAX`.
pub fn parse_aggregate(input: &str) -> Result<AggregateSpec, Error> {
    let Some((column, function)) = input.split_once('=') else {
        return Err(Error::aggregation("aggregate must be written as column=function"));
    };

    Ok(AggregateSpec {
        column: column.trim().to_string(),
        function: function.trim().to_lowercase(),
    })
}

impl FromStr for AggregateSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_aggregate(s)
    }
}

impl fmt::Display for AggregateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.function)
    }
}
