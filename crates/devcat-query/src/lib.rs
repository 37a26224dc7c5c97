//! # devcat-query
//!
//! Catalog Query Engine for DevCatalog.
//!
//! Pure, synchronous functions from a record list and a query to the
//! filtered list and per-category counts:
//! - [`filter_records`]: substring search over name, summary and tags, ANDed
//!   with optional category and status selections; order preserving
//! - [`compute_category_counts`]: a count for every category, zeros included
//! - [`QueryState`]: the toggle/reset policy the listing page drives
//!
//! Nothing here performs I/O or can fail. Values outside the enumerated sets
//! cannot reach the engine: the loader has already defaulted them.

mod counts;
mod engine;
mod selection;
mod state;

pub use counts::{CategoryCounts, compute_category_counts};
pub use engine::{filter_records, matches_search};
pub use selection::{CategoryFilter, Selection, StatusFilter};
pub use state::{CatalogView, QueryState};
