use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use foodies_client::{CatalogApi, ClientError, ClientResult};
use foodies_core::{CatalogFilter, CatalogScreenState, Config, Session};
use shared::message::BusMessage;
use shared::models::{Category, MeasureUnit, Product, Tag};

/// In-memory catalog source
struct MemoryApi {
    categories: Vec<Category>,
    products: Vec<Product>,
    tags: Vec<Tag>,
    broken: bool,
}

#[async_trait]
impl CatalogApi for MemoryApi {
    async fn categories(&self) -> ClientResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn products(&self) -> ClientResult<Vec<Product>> {
        if self.broken {
            return Err(ClientError::InvalidResponse("truncated body".into()));
        }
        Ok(self.products.clone())
    }

    async fn tags(&self) -> ClientResult<Vec<Tag>> {
        Ok(self.tags.clone())
    }
}

fn dish(id: i64, category_id: i64, name: &str, price: i64, old: Option<i64>, tags: &[i64]) -> Product {
    Product {
        id,
        category_id,
        name: name.into(),
        description: format!("{} description", name),
        image: format!("https://cdn.example/{}.jpg", id),
        price_current: price,
        price_old: old,
        measure: 500,
        measure_unit: MeasureUnit::Gr,
        energy_per_100_grams: 120.0,
        proteins_per_100_grams: 6.5,
        fats_per_100_grams: 4.0,
        carbohydrates_per_100_grams: 15.0,
        tag_ids: tags.to_vec(),
    }
}

fn memory_api(broken: bool) -> MemoryApi {
    MemoryApi {
        categories: vec![
            Category { id: 10, name: "Роллы".into() },
            Category { id: 20, name: "Супы".into() },
        ],
        products: vec![
            dish(1, 10, "Филадельфия", 48000, Some(56000), &[]),
            dish(2, 10, "Овощной ролл", 31000, None, &[2]),
            dish(3, 10, "Острый лосось", 45000, None, &[4]),
            dish(4, 20, "Том Ям", 72000, Some(80000), &[4]),
            dish(5, 20, "Суп мисо", 30000, None, &[2]),
        ],
        tags: vec![
            Tag { id: 2, name: "Вегетарианское блюдо".into() },
            Tag { id: 4, name: "Острое".into() },
        ],
        broken,
    }
}

fn russian_config() -> Config {
    let mut config = Config::default();
    config.filter_tags.vegetarian = "Вегетарианское блюдо".into();
    config.filter_tags.spicy = "Острое".into();
    config
}

fn names(state: &CatalogScreenState) -> Vec<String> {
    state
        .view()
        .map(|v| v.filtered_products.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test(start_paused = true)]
async fn test_browse_filter_search_and_shared_cart() {
    let session = Session::new(russian_config(), Arc::new(memory_api(false)));
    let catalog = session.open_catalog();
    let detail = session.product_detail();
    let cart_view = session.cart_view();

    let state = catalog.settled().await;
    assert_eq!(names(&state), vec!["Филадельфия", "Овощной ролл", "Острый лосось"]);

    // Staged filter does nothing until applied
    catalog.toggle_filter(CatalogFilter::NoMeat, false);
    assert_eq!(names(&catalog.state()).len(), 3);
    catalog.apply_filters();
    assert_eq!(names(&catalog.state()), vec!["Овощной ролл"]);
    catalog.toggle_filter(CatalogFilter::NoMeat, true);
    catalog.apply_filters();

    // Debounced search, case-insensitive over Cyrillic
    catalog.select_category(20);
    catalog.set_search_text("  том ");
    assert_eq!(names(&catalog.state()).len(), 2);
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(names(&catalog.state()), vec!["Том Ям"]);

    // Cart changes made on one screen show up on the others
    let tom_yum = catalog.state().view().unwrap().filtered_products[0].clone();
    catalog.add_to_cart(tom_yum.clone());
    detail.select_product(tom_yum.clone());
    detail.increment(tom_yum.clone());

    assert_eq!(catalog.quantity_in_cart(tom_yum.id), 2);
    assert_eq!(detail.quantity_in_cart(), 2);
    let cart = cart_view.state();
    assert_eq!(cart.total_price, 144000);
    assert_eq!(cart.formatted_total(), "1440.00");

    cart_view.decrement(tom_yum.clone());
    cart_view.decrement(tom_yum.clone());
    assert!(cart_view.state().is_empty());
    assert!(!detail.is_in_cart());
    assert_eq!(catalog.quantity_in_cart(tom_yum.id), 0);

    session.shutdown();
}

#[tokio::test]
async fn test_late_screen_sees_latest_cart() {
    let session = Session::new(russian_config(), Arc::new(memory_api(false)));
    let catalog = session.open_catalog();
    let state = catalog.settled().await;
    let products = state.view().unwrap().products.clone();

    let mut early = session.bus().subscribe();
    session.cart().increment(products[0].clone());
    session.cart().increment(products[1].clone());

    // Opened after both changes
    let detail = session.product_detail();
    let snapshot = detail.state().products_in_cart;
    assert_eq!(snapshot.sequence, 2);
    assert_eq!(snapshot.total_price, 48000 + 31000);

    // The early subscriber saw both, in order
    let sequences: Vec<u64> = std::iter::from_fn(|| early.try_recv())
        .map(|msg| match msg {
            BusMessage::CartChanged(s) => s.sequence,
        })
        .collect();
    assert_eq!(sequences, vec![1, 2]);
}

#[tokio::test]
async fn test_failed_load_then_refetch() {
    let session = Session::new(russian_config(), Arc::new(memory_api(true)));
    let catalog = session.open_catalog();
    assert!(catalog.settled().await.is_error());

    catalog.select_category(20);
    catalog.refetch();
    assert!(catalog.settled().await.is_error());
    assert_eq!(catalog.state(), CatalogScreenState::Error);
}

#[tokio::test]
async fn test_missing_filter_tag_yields_empty_list() {
    // Default tag names are not present in this catalog
    let session = Session::new(Config::default(), Arc::new(memory_api(false)));
    let catalog = session.open_catalog();
    catalog.settled().await;

    catalog.toggle_filter(CatalogFilter::Spicy, false);
    catalog.apply_filters();
    assert!(names(&catalog.state()).is_empty());

    // Discount filter is structural and unaffected by tag names
    catalog.toggle_filter(CatalogFilter::Spicy, true);
    catalog.toggle_filter(CatalogFilter::Discounted, false);
    catalog.apply_filters();
    assert_eq!(names(&catalog.state()), vec!["Филадельфия"]);
}
