//! Data models
//!
//! Domain types produced by the catalog fetch. All IDs are `i64` and all
//! prices are integer minor currency units.

pub mod catalog;
pub mod category;
pub mod product;
pub mod tag;

// Re-exports
pub use catalog::*;
pub use category::*;
pub use product::*;
pub use tag::*;
