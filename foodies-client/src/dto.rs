//! Wire DTOs for the three catalog collections
//!
//! Field names follow the remote JSON. Conversion into `shared` models
//! happens here so nothing past the client sees the wire shape.

use serde::{Deserialize, Serialize};
use shared::models::{Category, MeasureUnit, Product, Tag};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
}

/// Measure unit as sent by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureUnitDto {
    #[serde(rename = "г", alias = "GR")]
    Gr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price_current: i64,
    #[serde(default)]
    pub price_old: Option<i64>,
    pub measure: i32,
    pub measure_unit: MeasureUnitDto,
    pub energy_per_100_grams: f32,
    pub proteins_per_100_grams: f32,
    pub fats_per_100_grams: f32,
    pub carbohydrates_per_100_grams: f32,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl From<TagDto> for Tag {
    fn from(dto: TagDto) -> Self {
        Tag {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl From<MeasureUnitDto> for MeasureUnit {
    fn from(dto: MeasureUnitDto) -> Self {
        match dto {
            MeasureUnitDto::Gr => MeasureUnit::Gr,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: dto.id,
            category_id: dto.category_id,
            name: dto.name,
            description: dto.description,
            image: dto.image,
            price_current: dto.price_current,
            price_old: dto.price_old,
            measure: dto.measure,
            measure_unit: dto.measure_unit.into(),
            energy_per_100_grams: dto.energy_per_100_grams,
            proteins_per_100_grams: dto.proteins_per_100_grams,
            fats_per_100_grams: dto.fats_per_100_grams,
            carbohydrates_per_100_grams: dto.carbohydrates_per_100_grams,
            tag_ids: dto.tag_ids,
        }
    }
}
