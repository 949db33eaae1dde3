//! DeleteProduct applier
//!
//! Removes the whole entry regardless of its quantity.

use shared::cart::{CartCommand, CartSnapshot};

use super::position;
use crate::cart::traits::CartApplier;

/// DeleteProduct applier
pub struct DeleteProductApplier;

impl CartApplier for DeleteProductApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, command: &CartCommand) -> bool {
        let CartCommand::DeleteProduct { product } = command else {
            return false;
        };
        let Some(idx) = position(snapshot, product.id) else {
            return false;
        };

        let removed = snapshot.entries.remove(idx);
        snapshot.total_price -= removed.line_total();
        true
    }
}
