//! 购物车镜像
//!
//! 界面状态持有的只读购物车副本，由总线上的 `CartChanged` 快照驱动。
//! 按 sequence 合并，旧快照不会覆盖新快照。

use std::sync::{Mutex, PoisonError};

use shared::cart::CartSnapshot;
use shared::message::BusMessage;

use crate::message::{EventBus, Subscription};

struct MirrorState {
    subscription: Subscription<BusMessage>,
    cart: CartSnapshot,
}

/// 订阅总线的购物车副本
pub struct CartMirror {
    state: Mutex<MirrorState>,
}

impl CartMirror {
    /// 订阅总线；如果总线已有快照，立即回放
    pub fn new(bus: &EventBus<BusMessage>) -> Self {
        let mut state = MirrorState {
            subscription: bus.subscribe(),
            cart: CartSnapshot::new(),
        };
        state.sync();
        Self {
            state: Mutex::new(state),
        }
    }

    /// 合并所有待处理快照后返回当前副本
    pub fn snapshot(&self) -> CartSnapshot {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.sync();
        state.cart.clone()
    }

    pub fn quantity_of(&self, product_id: i64) -> u32 {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.sync();
        state.cart.quantity_of(product_id)
    }
}

impl MirrorState {
    fn sync(&mut self) {
        while let Some(msg) = self.subscription.try_recv() {
            match msg {
                BusMessage::CartChanged(snapshot) => {
                    if snapshot.sequence >= self.cart.sequence {
                        self.cart = snapshot;
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for CartMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartMirror").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::test_support::{SOUPS, product};

    #[test]
    fn test_mirror_follows_store() {
        let bus = EventBus::new();
        let cart = CartStore::new(bus.clone());
        let mirror = CartMirror::new(&bus);
        assert!(mirror.snapshot().is_empty());

        let p = product(1, SOUPS, "Tom Yum", 7200);
        cart.increment(p.clone());
        cart.increment(p);

        assert_eq!(mirror.quantity_of(1), 2);
        assert_eq!(mirror.snapshot(), cart.snapshot());
    }

    #[test]
    fn test_late_mirror_replays_latest() {
        let bus = EventBus::new();
        let cart = CartStore::new(bus.clone());
        cart.increment(product(1, SOUPS, "Tom Yum", 7200));
        cart.increment(product(2, SOUPS, "Miso Soup", 3000));

        let mirror = CartMirror::new(&bus);
        let snapshot = mirror.snapshot();
        assert_eq!(snapshot.sequence, 2);
        assert_eq!(snapshot.total_price, 10200);
    }

    #[test]
    fn test_older_snapshot_is_ignored() {
        let bus = EventBus::new();
        let mirror = CartMirror::new(&bus);

        let mut newer = CartSnapshot::new();
        newer.sequence = 5;
        let mut older = CartSnapshot::new();
        older.sequence = 3;
        older.total_price = 100;

        bus.publish(BusMessage::cart_changed(newer));
        bus.publish(BusMessage::cart_changed(older));
        assert_eq!(mirror.snapshot().sequence, 5);
        assert_eq!(mirror.snapshot().total_price, 0);
    }

    #[test]
    fn test_unread_mirror_catches_up_past_capacity() {
        let bus = EventBus::with_capacity(2);
        let cart = CartStore::new(bus.clone());
        let mirror = CartMirror::new(&bus);
        let p = product(1, SOUPS, "Tom Yum", 7200);

        for _ in 0..10 {
            cart.increment(p.clone());
        }

        let snapshot = mirror.snapshot();
        assert_eq!(snapshot.sequence, 10);
        assert_eq!(snapshot.quantity_of(1), 10);
        assert_eq!(snapshot, cart.snapshot());
        // Caught up: nothing left to merge
        assert_eq!(mirror.snapshot().sequence, 10);
    }
}
