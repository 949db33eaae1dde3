//! Catalog module
//!
//! - `fetcher`: three concurrent collection fetches
//! - `aggregator`: three-way join with error dominance
//! - `filter`: category / search / filter predicate
//! - `state`: screen state tagged union
//! - `store`: the catalog screen store (debounced search, staged filters)

pub mod aggregator;
pub mod fetcher;
pub mod filter;
pub mod state;
pub mod store;

pub use aggregator::{CatalogAggregator, FetchUpdate, aggregate};
pub use fetcher::CatalogFetcher;
pub use filter::{CatalogFilter, FilterParseError, FilterTags, ProductQuery, SelectedFilters, filter_products};
pub use state::{CatalogScreenState, CatalogView};
pub use store::{CatalogSettings, CatalogStore};
