//! Tag Model

use serde::{Deserialize, Serialize};

/// Tag entity
///
/// Products reference tags by id. Some tags carry meaning for the catalog
/// filters and are matched by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Find the id of the tag with exactly this name
pub fn find_tag_id(tags: &[Tag], name: &str) -> Option<i64> {
    tags.iter().find(|t| t.name == name).map(|t| t.id)
}
