//! Foodies Client - HTTP client for the catalog endpoint
//!
//! Fetches categories, products and tags as three independent JSON
//! collections and maps them into `shared` domain models.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod http;

pub use api::CatalogApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Catalog, Category, MeasureUnit, Product, Tag};
