//! Cart applier trait

use enum_dispatch::enum_dispatch;
use shared::cart::{CartCommand, CartSnapshot};

/// Applies one command to a snapshot
///
/// Appliers are PURE: they edit entries and keep `total_price` equal to the
/// sum of line totals. Returns `false` when the command changed nothing.
/// Sequence, timestamp and checksum are handled by the store.
#[enum_dispatch]
pub trait CartApplier {
    fn apply(&self, snapshot: &mut CartSnapshot, command: &CartCommand) -> bool;
}
