//! Cart commands - requests from screens to modify the cart

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Command type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartCommandType {
    ProductAdded,
    ProductDeleted,
    CountIncremented,
    CountDecremented,
    CartCleared,
}

impl std::fmt::Display for CartCommandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CartCommandType::ProductAdded => "product_added",
            CartCommandType::ProductDeleted => "product_deleted",
            CartCommandType::CountIncremented => "count_incremented",
            CartCommandType::CountDecremented => "count_decremented",
            CartCommandType::CartCleared => "cart_cleared",
        };
        write!(f, "{}", name)
    }
}

/// Cart command
///
/// Carries the full product so the store can price it without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartCommand {
    /// Insert with quantity 1; no-op when already present
    AddProduct { product: Product },
    /// Remove the entry regardless of quantity
    DeleteProduct { product: Product },
    /// Quantity + 1, creating the entry if absent
    Increment { product: Product },
    /// Quantity - 1, removing the entry when it would reach 0
    Decrement { product: Product },
    /// Drop every entry
    Clear,
}

impl CartCommand {
    pub fn command_type(&self) -> CartCommandType {
        match self {
            CartCommand::AddProduct { .. } => CartCommandType::ProductAdded,
            CartCommand::DeleteProduct { .. } => CartCommandType::ProductDeleted,
            CartCommand::Increment { .. } => CartCommandType::CountIncremented,
            CartCommand::Decrement { .. } => CartCommandType::CountDecremented,
            CartCommand::Clear => CartCommandType::CartCleared,
        }
    }

    /// Target product, if the command has one
    pub fn product(&self) -> Option<&Product> {
        match self {
            CartCommand::AddProduct { product }
            | CartCommand::DeleteProduct { product }
            | CartCommand::Increment { product }
            | CartCommand::Decrement { product } => Some(product),
            CartCommand::Clear => None,
        }
    }
}
