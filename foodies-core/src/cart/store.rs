//! CartStore - 购物车的唯一写入路径
//!
//! 所有变更都经过 [`CartStore::execute`]:
//!
//! ```text
//! execute(cmd)
//!     ├─ 1. lock snapshot
//!     ├─ 2. CartAction::from(&cmd).apply(&mut next)
//!     ├─ 3. no-op → 直接返回当前快照，不发布
//!     ├─ 4. sequence += 1, updated_at, checksum
//!     ├─ 5. commit
//!     └─ 6. publish BusMessage::CartChanged (仍持有锁)
//! ```
//!
//! 在锁内发布保证所有订阅者看到的快照顺序与提交顺序一致。

use std::sync::{Arc, Mutex, PoisonError};

use shared::cart::{CartCommand, CartSnapshot};
use shared::message::BusMessage;
use shared::models::Product;
use shared::util::now_millis;

use super::appliers::apply_command;
use crate::message::EventBus;

struct CartInner {
    snapshot: Mutex<CartSnapshot>,
    bus: EventBus<BusMessage>,
}

/// 购物车 store
///
/// Clone 后共享同一份状态。
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartInner>,
}

impl CartStore {
    pub fn new(bus: EventBus<BusMessage>) -> Self {
        Self {
            inner: Arc::new(CartInner {
                snapshot: Mutex::new(CartSnapshot::new()),
                bus,
            }),
        }
    }

    /// 执行命令并返回提交后的快照
    pub fn execute(&self, cmd: CartCommand) -> CartSnapshot {
        let mut current = self
            .inner
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut next = current.clone();
        if !apply_command(&mut next, &cmd) {
            tracing::debug!(command = %cmd.command_type(), "Cart command changed nothing");
            return current.clone();
        }

        next.sequence += 1;
        next.updated_at = now_millis();
        next.update_checksum();
        *current = next.clone();

        tracing::debug!(
            command = %cmd.command_type(),
            sequence = next.sequence,
            entries = next.len(),
            total = next.total_price,
            "Cart updated"
        );
        self.inner.bus.publish(BusMessage::cart_changed(next.clone()));
        next
    }

    pub fn add_product(&self, product: Product) -> CartSnapshot {
        self.execute(CartCommand::AddProduct { product })
    }

    pub fn delete_product(&self, product: Product) -> CartSnapshot {
        self.execute(CartCommand::DeleteProduct { product })
    }

    pub fn increment(&self, product: Product) -> CartSnapshot {
        self.execute(CartCommand::Increment { product })
    }

    pub fn decrement(&self, product: Product) -> CartSnapshot {
        self.execute(CartCommand::Decrement { product })
    }

    pub fn clear(&self) -> CartSnapshot {
        self.execute(CartCommand::Clear)
    }

    /// 当前快照
    pub fn snapshot(&self) -> CartSnapshot {
        self.inner
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.inner
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .quantity_of(product_id)
    }

    /// 快照发布所用的总线
    pub fn bus(&self) -> &EventBus<BusMessage> {
        &self.inner.bus
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("CartStore")
            .field("sequence", &snapshot.sequence)
            .field("entries", &snapshot.len())
            .field("total_price", &snapshot.total_price)
            .finish()
    }
}
