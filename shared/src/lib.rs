//! Shared types for the Foodies client
//!
//! Domain models, cart snapshots and bus messages used by both the
//! HTTP client crate and the state core.

pub mod cart;
pub mod message;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartCommand, CartEntry, CartSnapshot};
pub use message::BusMessage;
pub use models::{Catalog, Category, MeasureUnit, Product, Tag};
pub use request::RequestResult;
