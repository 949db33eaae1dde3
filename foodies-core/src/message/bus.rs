//! 回放总线核心实现
//!
//! # 架构
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 EventBus<T>                  │
//! │  latest: Mutex<Option<T>>   (回放槽, 最多一条) │
//! │  tx:     broadcast::Sender<T>                │
//! └──────────────────────┬──────────────────────┘
//!                        │ subscribe()
//!          ┌─────────────┼─────────────┐
//!          ▼             ▼             ▼
//!    Subscription   Subscription   Subscription
//!    (先回放最新值, 再按发布顺序接收)
//! ```
//!
//! 发布和订阅都在同一把锁内完成，新订阅者不会重复或遗漏
//! 与订阅并发的那一条消息。

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// 默认广播缓冲容量
pub const DEFAULT_CAPACITY: usize = 64;

struct BusInner<T> {
    tx: broadcast::Sender<T>,
    latest: Mutex<Option<T>>,
}

/// 带最新值回放的广播总线
///
/// Clone 后共享同一通道。
pub struct EventBus<T> {
    inner: Arc<BusInner<T>>,
}

impl<T: Clone + Send + 'static> EventBus<T> {
    /// 创建默认容量的总线
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 创建指定容量的总线
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            inner: Arc::new(BusInner {
                tx,
                latest: Mutex::new(None),
            }),
        }
    }

    /// 发布消息 (fire-and-forget)
    ///
    /// 没有订阅者时消息只保存在回放槽中。
    pub fn publish(&self, msg: T) {
        let mut latest = self
            .inner
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *latest = Some(msg.clone());
        if self.inner.tx.send(msg).is_err() {
            tracing::trace!("Bus publish with no active subscribers");
        }
    }

    /// 订阅
    ///
    /// 如果曾经发布过消息，第一条收到的是最新一条。
    pub fn subscribe(&self) -> Subscription<T> {
        let latest = self
            .inner
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Subscription {
            replay: latest.clone(),
            rx: self.inner.tx.subscribe(),
        }
    }

    /// 最新一条消息
    pub fn latest(&self) -> Option<T> {
        self.inner
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.inner.tx.receiver_count()
    }
}

impl<T: Clone + Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.inner.tx.receiver_count())
            .finish()
    }
}

/// 总线订阅
pub struct Subscription<T> {
    replay: Option<T>,
    rx: broadcast::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// 接收下一条消息，总线关闭时返回 None
    pub async fn recv(&mut self) -> Option<T> {
        if let Some(msg) = self.replay.take() {
            return Some(msg);
        }
        loop {
            match self.rx.recv().await {
                Ok(msg) => return Some(msg),
                Err(RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Bus subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// 非阻塞接收，没有待处理消息时返回 None
    ///
    /// 轮询方只关心最新状态，落后时跳过的消息只记 debug 日志。
    pub fn try_recv(&mut self) -> Option<T> {
        if let Some(msg) = self.replay.take() {
            return Some(msg);
        }
        loop {
            match self.rx.try_recv() {
                Ok(msg) => return Some(msg),
                Err(TryRecvError::Lagged(n)) => {
                    tracing::debug!(skipped = n, "Polled subscriber lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// 取出所有待处理消息中的最后一条
    pub fn drain_latest(&mut self) -> Option<T> {
        let mut last = None;
        while let Some(msg) = self.try_recv() {
            last = Some(msg);
        }
        last
    }
}
