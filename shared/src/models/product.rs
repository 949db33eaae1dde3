//! Product Model

use serde::{Deserialize, Serialize};

/// Unit of `Product::measure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasureUnit {
    /// Grams
    #[default]
    Gr,
}

impl MeasureUnit {
    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            MeasureUnit::Gr => "г",
        }
    }
}

impl std::fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    /// Category reference
    pub category_id: i64,
    pub name: String,
    pub description: String,
    /// Image reference (file name or URL, resolved by the UI)
    pub image: String,
    /// Current price in minor units
    pub price_current: i64,
    /// Price before discount; present means the product is on discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_old: Option<i64>,
    pub measure: i32,
    pub measure_unit: MeasureUnit,
    pub energy_per_100_grams: f32,
    pub proteins_per_100_grams: f32,
    pub fats_per_100_grams: f32,
    pub carbohydrates_per_100_grams: f32,
    /// Tag references, in API order
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

impl Product {
    pub fn is_discounted(&self) -> bool {
        self.price_old.is_some()
    }

    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tag_ids.contains(&tag_id)
    }

    /// e.g. `"500 г"`
    pub fn measure_label(&self) -> String {
        format!("{} {}", self.measure, self.measure_unit)
    }
}
