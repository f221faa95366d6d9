/// Data layer: loading, expression parsing, filtering and aggregation.
///
/// Architecture:
/// ```text
///   products.csv        --where / --aggregate strings
///        │                        │
///        ▼                        ▼
///   ┌──────────┐           ┌──────────┐
///   │  loader   │           │   expr    │  text → FilterPredicate / AggregateSpec
///   └──────────┘           └──────────┘
///        │ Dataset                │
///        ▼                        ▼
///   ┌──────────┐           ┌───────────┐
///   │  filter   │ ───────▶ │ aggregate  │  rows → one rounded number
///   └──────────┘  &Row[]   └───────────┘
/// ```

pub mod aggregate;
pub mod expr;
pub mod filter;
pub mod loader;
pub mod model;
