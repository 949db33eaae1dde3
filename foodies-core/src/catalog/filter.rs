//! Product filtering
//!
//! A product is shown iff it is in the selected category, its name contains
//! the trimmed search text (case-insensitive) and every active filter holds.
//!
//! "no-meat" and "spicy" are tag filters: the tag id is looked up by exact
//! name at evaluation time. When the tag does not exist the filter can never
//! be satisfied and the result is empty.
//!
//! "discounted" is NOT a tag filter. It checks `price_old` directly.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::models::{Product, Tag, find_tag_id};
use thiserror::Error;

/// Default tag name backing the "no-meat" filter
pub const VEGETARIAN_TAG_NAME: &str = "vegetarian dish";
/// Default tag name backing the "spicy" filter
pub const SPICY_TAG_NAME: &str = "spicy";

/// One of the three fixed catalog filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogFilter {
    NoMeat,
    Spicy,
    Discounted,
}

impl CatalogFilter {
    pub const ALL: [CatalogFilter; 3] = [
        CatalogFilter::NoMeat,
        CatalogFilter::Spicy,
        CatalogFilter::Discounted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogFilter::NoMeat => "no-meat",
            CatalogFilter::Spicy => "spicy",
            CatalogFilter::Discounted => "discounted",
        }
    }
}

impl fmt::Display for CatalogFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog filter: {0}")]
pub struct FilterParseError(pub String);

impl FromStr for CatalogFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no-meat" => Ok(CatalogFilter::NoMeat),
            "spicy" => Ok(CatalogFilter::Spicy),
            "discounted" => Ok(CatalogFilter::Discounted),
            other => Err(FilterParseError(other.to_string())),
        }
    }
}

/// Tag names the tag-based filters resolve against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTags {
    pub vegetarian: String,
    pub spicy: String,
}

impl Default for FilterTags {
    fn default() -> Self {
        Self {
            vegetarian: VEGETARIAN_TAG_NAME.to_string(),
            spicy: SPICY_TAG_NAME.to_string(),
        }
    }
}

/// Filter flags with a fixed key set, all initially false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFilters(BTreeMap<CatalogFilter, bool>);

impl SelectedFilters {
    pub fn is_selected(&self, filter: CatalogFilter) -> bool {
        self.0.get(&filter).copied().unwrap_or(false)
    }

    pub fn set(&mut self, filter: CatalogFilter, selected: bool) {
        self.0.insert(filter, selected);
    }

    /// Filters currently switched on, in declaration order
    pub fn active(&self) -> impl Iterator<Item = CatalogFilter> + '_ {
        self.0.iter().filter(|(_, on)| **on).map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CatalogFilter, bool)> + '_ {
        self.0.iter().map(|(f, on)| (*f, *on))
    }
}

impl Default for SelectedFilters {
    fn default() -> Self {
        Self(CatalogFilter::ALL.iter().map(|f| (*f, false)).collect())
    }
}

/// Category / search / filters to apply
#[derive(Debug, Clone, Copy)]
pub struct ProductQuery<'a> {
    pub category_id: Option<i64>,
    pub search_text: &'a str,
    pub filters: &'a SelectedFilters,
}

/// Condition an active filter translates to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Requirement {
    /// Must carry this tag; `None` when the tag name was not found
    Tag(Option<i64>),
    /// Must have `price_old`
    Discounted,
}

impl Requirement {
    fn resolve(filter: CatalogFilter, tags: &[Tag], names: &FilterTags) -> Self {
        match filter {
            CatalogFilter::NoMeat => Requirement::Tag(find_tag_id(tags, &names.vegetarian)),
            CatalogFilter::Spicy => Requirement::Tag(find_tag_id(tags, &names.spicy)),
            CatalogFilter::Discounted => Requirement::Discounted,
        }
    }

    fn holds(&self, product: &Product) -> bool {
        match self {
            Requirement::Tag(Some(tag_id)) => product.has_tag(*tag_id),
            Requirement::Tag(None) => false,
            Requirement::Discounted => product.is_discounted(),
        }
    }
}

/// Stable filter over `products`; relative order is preserved
pub fn filter_products(
    products: &[Product],
    tags: &[Tag],
    query: &ProductQuery<'_>,
    names: &FilterTags,
) -> Vec<Product> {
    let Some(category_id) = query.category_id else {
        return Vec::new();
    };

    let needle = query.search_text.trim().to_lowercase();
    let requirements: Vec<Requirement> = query
        .filters
        .active()
        .map(|f| Requirement::resolve(f, tags, names))
        .collect();

    products
        .iter()
        .filter(|p| p.category_id == category_id)
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| requirements.iter().all(|r| r.holds(p)))
        .cloned()
        .collect()
}
