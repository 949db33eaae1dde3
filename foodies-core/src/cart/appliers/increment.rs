//! Increment applier
//!
//! Quantity + 1. An absent product counts as quantity 0, so incrementing
//! creates the entry without a prior AddProduct.

use shared::cart::{CartCommand, CartEntry, CartSnapshot};

use super::position;
use crate::cart::traits::CartApplier;

/// Increment applier
pub struct IncrementApplier;

impl CartApplier for IncrementApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, command: &CartCommand) -> bool {
        let CartCommand::Increment { product } = command else {
            return false;
        };

        // An existing entry keeps the price it was added with
        match position(snapshot, product.id) {
            Some(idx) => {
                let entry = &mut snapshot.entries[idx];
                entry.quantity += 1;
                snapshot.total_price += entry.product.price_current;
            }
            None => {
                snapshot.entries.push(CartEntry::new(product.clone()));
                snapshot.total_price += product.price_current;
            }
        }
        true
    }
}
