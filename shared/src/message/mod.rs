//! 跨界面消息类型定义
//!
//! 购物车 store 发布，所有订阅的界面状态接收。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::CartSnapshot;

/// 消息总线事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum BusMessage {
    /// 购物车内容变化 (完整快照)
    CartChanged(CartSnapshot),
}

impl BusMessage {
    pub fn cart_changed(snapshot: CartSnapshot) -> Self {
        BusMessage::CartChanged(snapshot)
    }
}

impl fmt::Display for BusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusMessage::CartChanged(s) => write!(
                f,
                "cart_changed(seq={}, entries={}, total={})",
                s.sequence,
                s.len(),
                s.total_price
            ),
        }
    }
}
