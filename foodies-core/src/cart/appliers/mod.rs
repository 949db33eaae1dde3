//! Cart applier implementations
//!
//! Each applier implements the `CartApplier` trait and handles
//! one specific command type.

use enum_dispatch::enum_dispatch;

use shared::cart::{CartCommand, CartSnapshot};

use super::traits::CartApplier;

mod add_product;
mod clear;
mod decrement;
mod delete_product;
mod increment;

pub use add_product::AddProductApplier;
pub use clear::ClearApplier;
pub use decrement::DecrementApplier;
pub use delete_product::DeleteProductApplier;
pub use increment::IncrementApplier;

/// CartAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(CartApplier)]
pub enum CartAction {
    AddProduct(AddProductApplier),
    DeleteProduct(DeleteProductApplier),
    Increment(IncrementApplier),
    Decrement(DecrementApplier),
    Clear(ClearApplier),
}

/// This is the ONLY place with a match on CartCommand.
impl From<&CartCommand> for CartAction {
    fn from(command: &CartCommand) -> Self {
        match command {
            CartCommand::AddProduct { .. } => CartAction::AddProduct(AddProductApplier),
            CartCommand::DeleteProduct { .. } => CartAction::DeleteProduct(DeleteProductApplier),
            CartCommand::Increment { .. } => CartAction::Increment(IncrementApplier),
            CartCommand::Decrement { .. } => CartAction::Decrement(DecrementApplier),
            CartCommand::Clear => CartAction::Clear(ClearApplier),
        }
    }
}

/// Apply a command through its applier
pub fn apply_command(snapshot: &mut CartSnapshot, command: &CartCommand) -> bool {
    CartAction::from(command).apply(snapshot, command)
}

fn position(snapshot: &CartSnapshot, product_id: i64) -> Option<usize> {
    snapshot
        .entries
        .iter()
        .position(|e| e.product.id == product_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SOUPS, product};

    /// Deterministic pseudo-random sequence (LCG)
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            self.0 >> 33
        }
    }

    #[test]
    fn test_invariant_holds_for_any_sequence() {
        let products: Vec<_> = (1..=4)
            .map(|i| product(i, SOUPS, &format!("Dish {}", i), 1250 * i + 99))
            .collect();
        let mut rng = Lcg(42);
        let mut snapshot = CartSnapshot::new();

        for _ in 0..2000 {
            let p = products[(rng.next() % products.len() as u64) as usize].clone();
            let command = match rng.next() % 9 {
                0 | 1 => CartCommand::AddProduct { product: p },
                2 => CartCommand::DeleteProduct { product: p },
                3..=5 => CartCommand::Increment { product: p },
                6 | 7 => CartCommand::Decrement { product: p },
                _ => CartCommand::Clear,
            };
            apply_command(&mut snapshot, &command);

            assert_eq!(snapshot.total_price, snapshot.computed_total(), "after {:?}", command.command_type());
            assert!(snapshot.entries.iter().all(|e| e.quantity >= 1));

            let mut ids: Vec<_> = snapshot.entries.iter().map(|e| e.product.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), snapshot.entries.len(), "one entry per product");
        }
    }

    #[test]
    fn test_dispatch_matches_command() {
        let p = product(1, SOUPS, "Tom Yum", 100);
        assert!(matches!(
            CartAction::from(&CartCommand::AddProduct { product: p.clone() }),
            CartAction::AddProduct(_)
        ));
        assert!(matches!(
            CartAction::from(&CartCommand::Decrement { product: p }),
            CartAction::Decrement(_)
        ));
        assert!(matches!(CartAction::from(&CartCommand::Clear), CartAction::Clear(_)));
    }

    #[test]
    fn test_action_applies_through_dispatch() {
        let p = product(1, SOUPS, "Tom Yum", 7200);
        let mut snapshot = CartSnapshot::new();
        let command = CartCommand::Increment { product: p };

        let action = CartAction::from(&command);
        assert!(action.apply(&mut snapshot, &command));
        assert_eq!(snapshot.quantity_of(1), 1);
        assert_eq!(snapshot.total_price, 7200);
    }

    #[test]
    fn test_repriced_product_keeps_total_consistent() {
        let original = product(1, SOUPS, "Tom Yum", 7200);
        let mut repriced = original.clone();
        repriced.price_current = 8000;
        let mut snapshot = CartSnapshot::new();

        apply_command(&mut snapshot, &CartCommand::AddProduct { product: original });
        apply_command(&mut snapshot, &CartCommand::Increment { product: repriced.clone() });
        assert_eq!(snapshot.total_price, snapshot.computed_total());
        assert_eq!(snapshot.total_price, 14400);

        apply_command(&mut snapshot, &CartCommand::Decrement { product: repriced.clone() });
        apply_command(&mut snapshot, &CartCommand::Decrement { product: repriced });
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total_price, 0);
    }
}
