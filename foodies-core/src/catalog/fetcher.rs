//! Catalog fetcher
//!
//! Issues the three collection fetches concurrently and streams the
//! combined outcome after each one settles:
//!
//! ```text
//! categories ─┐
//! products   ─┼─► FuturesUnordered ─► CatalogAggregator ─► RequestResult<Catalog>
//! tags       ─┘
//! ```
//!
//! The stream always starts with `InProgress` and ends after the third fetch.

use std::sync::Arc;

use foodies_client::CatalogApi;
use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, BoxStream, FuturesUnordered, StreamExt};
use shared::models::Catalog;
use shared::request::RequestResult;

use super::aggregator::{CatalogAggregator, FetchUpdate};

/// Runs the fetch + aggregate pipeline against a [`CatalogApi`]
#[derive(Clone)]
pub struct CatalogFetcher {
    api: Arc<dyn CatalogApi>,
}

impl CatalogFetcher {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Start all three fetches; the returned stream yields combined outcomes
    pub fn fetch(&self) -> BoxStream<'static, RequestResult<Catalog>> {
        let updates: FuturesUnordered<BoxFuture<'static, FetchUpdate>> = FuturesUnordered::new();

        let api = Arc::clone(&self.api);
        updates.push(
            async move { FetchUpdate::Categories(logged("categories", api.categories().await)) }
                .boxed(),
        );
        let api = Arc::clone(&self.api);
        updates.push(
            async move { FetchUpdate::Products(logged("products", api.products().await)) }.boxed(),
        );
        let api = Arc::clone(&self.api);
        updates.push(async move { FetchUpdate::Tags(logged("tags", api.tags().await)) }.boxed());

        let combined = updates.scan(CatalogAggregator::new(), |aggregator, update| {
            future::ready(Some(aggregator.apply(update)))
        });

        stream::once(future::ready(RequestResult::InProgress))
            .chain(combined)
            .boxed()
    }

    /// Drive the pipeline to its final outcome
    pub async fn fetch_once(&self) -> RequestResult<Catalog> {
        let mut last = RequestResult::InProgress;
        let mut results = self.fetch();
        while let Some(result) = results.next().await {
            last = result;
        }
        last
    }
}

impl std::fmt::Debug for CatalogFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogFetcher").finish_non_exhaustive()
    }
}

/// Convert a client result, logging failures
fn logged<T>(collection: &'static str, result: foodies_client::ClientResult<T>) -> RequestResult<T> {
    match result {
        Ok(data) => {
            tracing::debug!(collection, "Collection fetched");
            RequestResult::Success(data)
        }
        Err(e) => {
            tracing::error!(collection, error = %e, "Error getting collection from server");
            RequestResult::error(format!("{}: {}", collection, e))
        }
    }
}
