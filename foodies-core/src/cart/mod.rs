//! Cart module
//!
//! ```text
//! CatalogStore ─┐
//! DetailStore  ─┼─► CartStore::execute ─► appliers ─► CartSnapshot ─► EventBus
//! CartView     ─┘        (one lock)                                      │
//!                                                                        ▼
//!                                                      CartMirror (every screen)
//! ```

pub mod traits;
pub mod appliers;
pub mod mirror;
pub mod store;
pub mod view;

pub use appliers::CartAction;
pub use mirror::CartMirror;
pub use store::CartStore;
pub use traits::CartApplier;
pub use view::{CartView, CartViewState};
