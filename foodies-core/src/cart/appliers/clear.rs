//! Clear applier

use shared::cart::{CartCommand, CartSnapshot};

use crate::cart::traits::CartApplier;

/// Clear applier
pub struct ClearApplier;

impl CartApplier for ClearApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, command: &CartCommand) -> bool {
        if !matches!(command, CartCommand::Clear) || snapshot.is_empty() {
            return false;
        }
        snapshot.entries.clear();
        snapshot.total_price = 0;
        true
    }
}
