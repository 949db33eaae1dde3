//! AddProduct applier
//!
//! Inserts the product with quantity 1. Adding a product that is already in
//! the cart does nothing; use Increment to raise the quantity.

use shared::cart::{CartCommand, CartEntry, CartSnapshot};

use super::position;
use crate::cart::traits::CartApplier;

/// AddProduct applier
pub struct AddProductApplier;

impl CartApplier for AddProductApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, command: &CartCommand) -> bool {
        let CartCommand::AddProduct { product } = command else {
            return false;
        };
        if position(snapshot, product.id).is_some() {
            return false;
        }

        snapshot.total_price += product.price_current;
        snapshot.entries.push(CartEntry::new(product.clone()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SOUPS, product};

    #[test]
    fn test_add_inserts_with_quantity_one() {
        let p = product(1, SOUPS, "Tom Yum", 7200);
        let mut snapshot = CartSnapshot::new();

        assert!(AddProductApplier.apply(&mut snapshot, &CartCommand::AddProduct { product: p }));
        assert_eq!(snapshot.quantity_of(1), 1);
        assert_eq!(snapshot.total_price, 7200);
    }

    #[test]
    fn test_add_is_idempotent() {
        let p = product(1, SOUPS, "Tom Yum", 7200);
        let mut snapshot = CartSnapshot::new();
        let command = CartCommand::AddProduct { product: p };

        AddProductApplier.apply(&mut snapshot, &command);
        assert!(!AddProductApplier.apply(&mut snapshot, &command));
        assert_eq!(snapshot.quantity_of(1), 1);
        assert_eq!(snapshot.total_price, 7200);
    }
}
