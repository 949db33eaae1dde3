//! Decrement applier
//!
//! Quantity - 1. When the quantity would drop to 0 the entry is removed and
//! its whole line total is subtracted, so the total always matches the
//! remaining entries. Decrementing an absent product does nothing.

use shared::cart::{CartCommand, CartSnapshot};

use super::position;
use crate::cart::traits::CartApplier;

/// Decrement applier
pub struct DecrementApplier;

impl CartApplier for DecrementApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, command: &CartCommand) -> bool {
        let CartCommand::Decrement { product } = command else {
            return false;
        };
        let Some(idx) = position(snapshot, product.id) else {
            return false;
        };

        if snapshot.entries[idx].quantity > 1 {
            snapshot.entries[idx].quantity -= 1;
            snapshot.total_price -= snapshot.entries[idx].product.price_current;
        } else {
            let removed = snapshot.entries.remove(idx);
            snapshot.total_price -= removed.line_total();
        }
        true
    }
}
