//! Catalog API seam
//!
//! The state core depends on this trait only; the HTTP implementation lives
//! on [`HttpClient`], tests plug in-memory fakes.

use async_trait::async_trait;
use shared::models::{Category, Product, Tag};

use crate::dto::{CategoryDto, ProductDto, TagDto};
use crate::{ClientResult, HttpClient};

/// Three independent read-only collection fetches
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn categories(&self) -> ClientResult<Vec<Category>>;

    async fn products(&self) -> ClientResult<Vec<Product>>;

    async fn tags(&self) -> ClientResult<Vec<Tag>>;
}

#[async_trait]
impl CatalogApi for HttpClient {
    async fn categories(&self) -> ClientResult<Vec<Category>> {
        let dtos: Vec<CategoryDto> = self.get(&self.categories_path).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn products(&self) -> ClientResult<Vec<Product>> {
        let dtos: Vec<ProductDto> = self.get(&self.products_path).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn tags(&self) -> ClientResult<Vec<Tag>> {
        let dtos: Vec<TagDto> = self.get(&self.tags_path).await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }
}
