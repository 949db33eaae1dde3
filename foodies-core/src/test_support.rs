//! Fixtures shared by unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use foodies_client::{CatalogApi, ClientError, ClientResult};
use shared::models::{Catalog, Category, MeasureUnit, Product, Tag};

pub const SOUPS: i64 = 676153;
pub const SUSHI: i64 = 676154;

pub fn product(id: i64, category_id: i64, name: &str, price_current: i64) -> Product {
    Product {
        id,
        category_id,
        name: name.to_string(),
        description: String::new(),
        image: format!("{}.jpg", id),
        price_current,
        price_old: None,
        measure: 250,
        measure_unit: MeasureUnit::Gr,
        energy_per_100_grams: 100.0,
        proteins_per_100_grams: 5.0,
        fats_per_100_grams: 5.0,
        carbohydrates_per_100_grams: 10.0,
        tag_ids: Vec::new(),
    }
}

pub fn sample_tags() -> Vec<Tag> {
    vec![
        Tag { id: 1, name: "new".into() },
        Tag { id: 2, name: "vegetarian dish".into() },
        Tag { id: 3, name: "hit".into() },
        Tag { id: 4, name: "spicy".into() },
    ]
}

pub fn sample_catalog() -> Catalog {
    let mut tom_yum = product(1, SOUPS, "Tom Yum", 72000);
    tom_yum.price_old = Some(80000);
    tom_yum.tag_ids = vec![4];
    let mut miso = product(2, SOUPS, "Miso Soup", 30000);
    miso.tag_ids = vec![2];
    let borscht = product(3, SOUPS, "Borscht", 39000);
    let mut roll = product(4, SUSHI, "Sushi Roll", 48000);
    roll.tag_ids = vec![2];
    let mut tuna = product(5, SUSHI, "Spicy Tuna Roll", 52000);
    tuna.price_old = Some(60000);
    tuna.tag_ids = vec![4];

    Catalog::new(
        vec![
            Category { id: SOUPS, name: "Soups".into() },
            Category { id: SUSHI, name: "Sushi".into() },
        ],
        vec![tom_yum, miso, borscht, roll, tuna],
        sample_tags(),
    )
}

/// In-memory [`CatalogApi`] with switchable failures
#[derive(Debug, Default)]
pub struct StaticCatalogApi {
    catalog: Catalog,
    fail_categories: bool,
    fail_products: bool,
    fail_tags: bool,
    /// Applied to successful fetches only
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticCatalogApi {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn failing_products(mut self) -> Self {
        self.fail_products = true;
        self
    }

    pub fn failing_tags(mut self) -> Self {
        self.fail_tags = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Total collection fetches served
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn serve<T>(&self, fail: bool, data: T) -> ClientResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if fail {
            return Err(ClientError::Server {
                status: 500,
                body: "unavailable".into(),
            });
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(data)
    }
}

#[async_trait]
impl CatalogApi for StaticCatalogApi {
    async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.serve(self.fail_categories, self.catalog.categories.clone()).await
    }

    async fn products(&self) -> ClientResult<Vec<Product>> {
        self.serve(self.fail_products, self.catalog.products.clone()).await
    }

    async fn tags(&self) -> ClientResult<Vec<Tag>> {
        self.serve(self.fail_tags, self.catalog.tags.clone()).await
    }
}
