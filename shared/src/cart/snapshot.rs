//! Cart snapshot - immutable cart state after a command
//!
//! The snapshot includes a `state_checksum` field for drift detection.
//! A subscriber can recompute it to verify it merged an untorn snapshot.

use serde::{Deserialize, Serialize};
use std::hash::Hash;

use crate::models::Product;

/// One product in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    /// Always >= 1; entries reaching 0 are removed
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// price_current * quantity, in minor units
    pub fn line_total(&self) -> i64 {
        self.product.price_current * i64::from(self.quantity)
    }
}

/// Cart snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Entries in insertion order, one per product id
    pub entries: Vec<CartEntry>,
    /// Sum of line totals, in minor units
    pub total_price: i64,
    /// Last applied command sequence (0 = never changed)
    pub sequence: u64,
    /// Last update timestamp (Unix millis)
    pub updated_at: i64,
    /// Computed from: entry count, total_price, sequence
    #[serde(default)]
    pub state_checksum: String,
}

impl CartSnapshot {
    /// Create an empty cart
    pub fn new() -> Self {
        let mut snapshot = Self {
            entries: Vec::new(),
            total_price: 0,
            sequence: 0,
            updated_at: crate::util::now_millis(),
            state_checksum: String::new(),
        };
        snapshot.update_checksum();
        snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of units across entries
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn entry(&self, product_id: i64) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == product_id)
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.entry(product_id).is_some()
    }

    /// Quantity of a product, 0 when absent
    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.entry(product_id).map(|e| e.quantity).unwrap_or(0)
    }

    /// Total recomputed from the entries
    ///
    /// Always equals `total_price` for a snapshot produced by the cart store.
    pub fn computed_total(&self) -> i64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Compute state checksum for drift detection
    ///
    /// Returns a 16-character hex string.
    pub fn compute_checksum(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher as _;

        let mut hasher = DefaultHasher::new();
        self.entries.len().hash(&mut hasher);
        for entry in &self.entries {
            entry.product.id.hash(&mut hasher);
            entry.quantity.hash(&mut hasher);
        }
        self.total_price.hash(&mut hasher);
        self.sequence.hash(&mut hasher);

        format!("{:016x}", hasher.finish())
    }

    /// Update the state_checksum field based on current state
    pub fn update_checksum(&mut self) {
        self.state_checksum = self.compute_checksum();
    }

    /// Returns false if drift detected
    pub fn verify_checksum(&self) -> bool {
        self.state_checksum == self.compute_checksum()
    }
}

impl Default for CartSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
