//! Catalog screen state
//!
//! `Loading | Error | Success(CatalogView)`; every consumer must match all
//! three. User operations only act on `Success`.

use serde::{Deserialize, Serialize};
use shared::models::{Catalog, Category, Product, Tag};
use shared::request::RequestResult;

use super::filter::{CatalogFilter, FilterTags, ProductQuery, SelectedFilters, filter_products};

/// Loaded catalog plus what the user currently looks at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    pub categories: Vec<Category>,
    /// Full, unfiltered product list
    pub products: Vec<Product>,
    /// Derived from the last applied category/search/filters
    pub filtered_products: Vec<Product>,
    pub tags: Vec<Tag>,
    /// `None` only when the catalog has no categories
    pub selected_category_id: Option<i64>,
    /// Bound to the search input; may be ahead of `filtered_products`
    pub search_text: String,
    pub selected_filters: SelectedFilters,
    pub is_filter_open: bool,
}

impl CatalogView {
    /// Fresh view: first category selected, no search, no filters
    pub fn from_catalog(catalog: Catalog) -> Self {
        let selected_category_id = catalog.categories.first().map(|c| c.id);
        let filtered_products = match selected_category_id {
            Some(id) => catalog.products_in_category(id).cloned().collect(),
            None => Vec::new(),
        };

        Self {
            categories: catalog.categories,
            products: catalog.products,
            filtered_products,
            tags: catalog.tags,
            selected_category_id,
            search_text: String::new(),
            selected_filters: SelectedFilters::default(),
            is_filter_open: false,
        }
    }

    /// Recompute `filtered_products` from the current fields
    pub fn recompute(&mut self, names: &FilterTags) {
        let query = ProductQuery {
            category_id: self.selected_category_id,
            search_text: &self.search_text,
            filters: &self.selected_filters,
        };
        self.filtered_products = filter_products(&self.products, &self.tags, &query, names);
    }

    pub fn is_filter_selected(&self, filter: CatalogFilter) -> bool {
        self.selected_filters.is_selected(filter)
    }

    /// Number of filters currently switched on (badge on the filter button)
    pub fn active_filter_count(&self) -> usize {
        self.selected_filters.active().count()
    }

    pub fn selected_category(&self) -> Option<&Category> {
        let id = self.selected_category_id?;
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Catalog screen state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "status", content = "view", rename_all = "snake_case")]
pub enum CatalogScreenState {
    #[default]
    Loading,
    Error,
    Success(Box<CatalogView>),
}

impl CatalogScreenState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogScreenState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CatalogScreenState::Error)
    }

    pub fn view(&self) -> Option<&CatalogView> {
        match self {
            CatalogScreenState::Success(view) => Some(&**view),
            CatalogScreenState::Loading | CatalogScreenState::Error => None,
        }
    }
}

impl From<RequestResult<Catalog>> for CatalogScreenState {
    fn from(result: RequestResult<Catalog>) -> Self {
        match result {
            RequestResult::InProgress => CatalogScreenState::Loading,
            RequestResult::Error(_) => CatalogScreenState::Error,
            RequestResult::Success(catalog) => {
                CatalogScreenState::Success(Box::new(CatalogView::from_catalog(catalog)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SOUPS, sample_catalog};

    #[test]
    fn test_success_selects_first_category() {
        let state = CatalogScreenState::from(RequestResult::Success(sample_catalog()));
        let view = state.view().unwrap();

        assert_eq!(view.selected_category_id, Some(SOUPS));
        assert!(view.filtered_products.iter().all(|p| p.category_id == SOUPS));
        assert_eq!(view.filtered_products.len(), 3);
        assert!(view.search_text.is_empty());
        assert!(!view.is_filter_open);
        assert_eq!(view.active_filter_count(), 0);
    }

    #[test]
    fn test_empty_catalog_selects_nothing() {
        let state = CatalogScreenState::from(RequestResult::Success(Catalog::default()));
        let view = state.view().unwrap();
        assert_eq!(view.selected_category_id, None);
        assert!(view.filtered_products.is_empty());
        assert!(view.selected_category().is_none());
    }

    #[test]
    fn test_non_success_results() {
        assert!(CatalogScreenState::from(RequestResult::<Catalog>::InProgress).is_loading());
        assert!(CatalogScreenState::from(RequestResult::<Catalog>::error("x")).is_error());
    }

    #[test]
    fn test_screen_state_json() {
        let loading = serde_json::to_value(CatalogScreenState::Loading).unwrap();
        assert_eq!(loading["status"], "loading");

        let state = CatalogScreenState::from(RequestResult::Success(sample_catalog()));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["view"]["selected_category_id"], SOUPS);
        assert_eq!(json["view"]["is_filter_open"], false);
    }
}
