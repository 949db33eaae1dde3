//! Result aggregator - three-way join of the collection fetches
//!
//! Precedence:
//! 1. any `Error` → `Error` (even if others are still in progress)
//! 2. any `InProgress` → `InProgress`
//! 3. all `Success` → `Success(Catalog)`
//!
//! There is no partial success: products cannot be shown without
//! their categories and tags.

use shared::models::{Catalog, Category, Product, Tag};
use shared::request::RequestResult;

/// One settled (or restarted) collection fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchUpdate {
    Categories(RequestResult<Vec<Category>>),
    Products(RequestResult<Vec<Product>>),
    Tags(RequestResult<Vec<Tag>>),
}

impl FetchUpdate {
    pub fn collection(&self) -> &'static str {
        match self {
            FetchUpdate::Categories(_) => "categories",
            FetchUpdate::Products(_) => "products",
            FetchUpdate::Tags(_) => "tags",
        }
    }
}

/// Combine three fetch outcomes into one
pub fn aggregate(
    categories: &RequestResult<Vec<Category>>,
    products: &RequestResult<Vec<Product>>,
    tags: &RequestResult<Vec<Tag>>,
) -> RequestResult<Catalog> {
    match (categories, products, tags) {
        (RequestResult::Error(cause), _, _)
        | (_, RequestResult::Error(cause), _)
        | (_, _, RequestResult::Error(cause)) => RequestResult::Error(cause.clone()),
        (RequestResult::Success(c), RequestResult::Success(p), RequestResult::Success(t)) => {
            RequestResult::Success(Catalog::new(c.clone(), p.clone(), t.clone()))
        }
        _ => RequestResult::InProgress,
    }
}

/// Order-independent join state
///
/// Starts with every collection `InProgress`; whichever fetch settles last
/// decides the transition out of `InProgress`.
#[derive(Debug, Clone, Default)]
pub struct CatalogAggregator {
    categories: RequestResult<Vec<Category>>,
    products: RequestResult<Vec<Product>>,
    tags: RequestResult<Vec<Tag>>,
}

impl CatalogAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one update and return the combined outcome
    pub fn apply(&mut self, update: FetchUpdate) -> RequestResult<Catalog> {
        match update {
            FetchUpdate::Categories(r) => self.categories = r,
            FetchUpdate::Products(r) => self.products = r,
            FetchUpdate::Tags(r) => self.tags = r,
        }
        self.combined()
    }

    pub fn combined(&self) -> RequestResult<Catalog> {
        aggregate(&self.categories, &self.products, &self.tags)
    }
}
