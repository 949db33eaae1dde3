//! CatalogStore - 目录界面状态机
//!
//! # 状态流转
//!
//! ```text
//! load() / refetch()
//!     │
//!     ▼
//!  Loading ──(三路拉取聚合)──► Success(view) | Error
//!                                  │
//!      select_category ────────────┤ 立即重算
//!      set_search_text ────────────┤ 文本立即更新，防抖后重算
//!      toggle_filter ──────────────┤ 暂存，不重算
//!      apply_filters ──────────────┘ 重算并关闭面板
//! ```
//!
//! 每次状态变化都在锁内提交并发布到 `updates` 总线，订阅者看到的顺序
//! 与提交顺序一致。拉取任务和防抖任务都绑定同一个 `CancellationToken`，
//! `shutdown()` (或 drop) 时一起取消。

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures::StreamExt;
use shared::cart::CartSnapshot;
use shared::models::Product;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::fetcher::CatalogFetcher;
use super::filter::{CatalogFilter, FilterTags};
use super::state::{CatalogScreenState, CatalogView};
use crate::cart::{CartMirror, CartStore};
use crate::core::Config;
use crate::message::{EventBus, Subscription};

/// 目录界面参数
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSettings {
    /// 搜索防抖时长
    pub search_debounce: Duration,
    /// 筛选标签名
    pub filter_tags: FilterTags,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(300),
            filter_tags: FilterTags::default(),
        }
    }
}

impl From<&Config> for CatalogSettings {
    fn from(config: &Config) -> Self {
        Self {
            search_debounce: config.search_debounce(),
            filter_tags: config.filter_tags.clone(),
        }
    }
}

struct CatalogInner {
    state: Mutex<CatalogScreenState>,
    updates: EventBus<CatalogScreenState>,
    fetcher: CatalogFetcher,
    settings: CatalogSettings,
    debounce: Mutex<Option<JoinHandle<()>>>,
    shutdown: CancellationToken,
}

/// 目录界面 store
///
/// 单一所有者；drop 时取消所有后台任务。需要在 tokio 运行时内使用。
pub struct CatalogStore {
    inner: Arc<CatalogInner>,
    cart: CartStore,
    mirror: CartMirror,
}

impl CatalogStore {
    /// 创建 store，初始状态为 `Loading`，不会自动拉取
    ///
    /// `shutdown` 取消时 store 的后台任务一起停止；store 自身的
    /// shutdown 不会影响传入的 token。
    pub fn new(
        fetcher: CatalogFetcher,
        cart: CartStore,
        settings: CatalogSettings,
        shutdown: &CancellationToken,
    ) -> Self {
        let mirror = CartMirror::new(cart.bus());
        Self {
            inner: Arc::new(CatalogInner {
                state: Mutex::new(CatalogScreenState::Loading),
                updates: EventBus::new(),
                fetcher,
                settings,
                debounce: Mutex::new(None),
                shutdown: shutdown.child_token(),
            }),
            cart,
            mirror,
        }
    }

    // ========== 拉取 ==========

    /// 拉取目录
    pub fn load(&self) {
        self.inner.commit(CatalogScreenState::Loading);
        if self.inner.shutdown.is_cancelled() {
            tracing::warn!("Catalog store is shut down, load ignored");
            return;
        }

        tracing::info!("Loading catalog");
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let mut results = inner.fetcher.fetch();
            loop {
                tokio::select! {
                    _ = inner.shutdown.cancelled() => {
                        tracing::debug!("Catalog load cancelled");
                        break;
                    }
                    next = results.next() => {
                        let Some(result) = next else { break };
                        let next_state = CatalogScreenState::from(result);
                        match &next_state {
                            CatalogScreenState::Success(view) => tracing::info!(
                                categories = view.categories.len(),
                                products = view.products.len(),
                                tags = view.tags.len(),
                                "Catalog loaded"
                            ),
                            CatalogScreenState::Error => tracing::warn!("Catalog load failed"),
                            CatalogScreenState::Loading => {}
                        }
                        inner.commit(next_state);
                    }
                }
            }
        });
    }

    /// 丢弃当前目录状态，重新拉取
    ///
    /// 进行中的旧拉取不会被取消，也不做过期响应判断。
    pub fn refetch(&self) {
        tracing::info!("Refetching catalog");
        self.load();
    }

    // ========== 读取 ==========

    /// 当前界面状态
    pub fn state(&self) -> CatalogScreenState {
        self.inner.lock_state().clone()
    }

    /// 订阅状态变化，首先回放最新状态
    pub fn subscribe(&self) -> Subscription<CatalogScreenState> {
        self.inner.updates.subscribe()
    }

    /// 等待离开 `Loading` 状态
    ///
    /// store 已关闭时直接返回当前状态。
    pub async fn settled(&self) -> CatalogScreenState {
        let mut updates = self.subscribe();
        let current = self.state();
        if !current.is_loading() {
            return current;
        }

        loop {
            tokio::select! {
                _ = self.inner.shutdown.cancelled() => return self.state(),
                next = updates.recv() => match next {
                    Some(state) if !state.is_loading() => return state,
                    Some(_) => continue,
                    None => return self.state(),
                },
            }
        }
    }

    // ========== 分类 / 搜索 / 筛选 ==========

    /// 选择分类并立即重算
    pub fn select_category(&self, category_id: i64) {
        let names = &self.inner.settings.filter_tags;
        self.inner.update(|view| {
            view.selected_category_id = Some(category_id);
            view.recompute(names);
        });
    }

    /// 更新搜索文本，重算延后到防抖结束
    ///
    /// 新的调用取消尚未执行的重算。
    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        if !self.inner.update(|view| view.search_text = text) {
            return;
        }
        self.schedule_search();
    }

    /// 切换单个筛选项 (暂存，直到 `apply_filters`)
    ///
    /// `is_selected` 是界面上该项当前的选中状态，结果为取反。
    pub fn toggle_filter(&self, filter: CatalogFilter, is_selected: bool) {
        self.inner
            .update(|view| view.selected_filters.set(filter, !is_selected));
    }

    /// 应用暂存的筛选项并关闭面板
    pub fn apply_filters(&self) {
        let names = &self.inner.settings.filter_tags;
        self.inner.update(|view| {
            view.recompute(names);
            view.is_filter_open = false;
        });
    }

    pub fn open_filter_panel(&self) {
        self.inner.update(|view| view.is_filter_open = true);
    }

    pub fn close_filter_panel(&self) {
        self.inner.update(|view| view.is_filter_open = false);
    }

    pub fn toggle_filter_panel(&self) {
        self.inner
            .update(|view| view.is_filter_open = !view.is_filter_open);
    }

    fn schedule_search(&self) {
        let mut pending = self
            .inner
            .debounce
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let inner = Arc::clone(&self.inner);
        *pending = Some(tokio::spawn(async move {
            tokio::select! {
                _ = inner.shutdown.cancelled() => {}
                _ = tokio::time::sleep(inner.settings.search_debounce) => {
                    let names = &inner.settings.filter_tags;
                    inner.update(|view| {
                        tracing::debug!(search = %view.search_text, "Applying search");
                        view.recompute(names);
                    });
                }
            }
        }));
    }

    // ========== 购物车 ==========

    pub fn add_to_cart(&self, product: Product) -> CartSnapshot {
        self.cart.add_product(product)
    }

    pub fn delete_from_cart(&self, product: Product) -> CartSnapshot {
        self.cart.delete_product(product)
    }

    pub fn increment_in_cart(&self, product: Product) -> CartSnapshot {
        self.cart.increment(product)
    }

    pub fn decrement_in_cart(&self, product: Product) -> CartSnapshot {
        self.cart.decrement(product)
    }

    /// 商品卡片上显示的数量
    pub fn quantity_in_cart(&self, product_id: i64) -> u32 {
        self.mirror.quantity_of(product_id)
    }

    /// 本界面看到的购物车
    pub fn cart(&self) -> CartSnapshot {
        self.mirror.snapshot()
    }

    // ========== 生命周期 ==========

    /// 取消拉取和待执行的搜索重算
    pub fn shutdown(&self) {
        self.inner.shutdown.cancel();
        let pending = self
            .inner
            .debounce
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = pending {
            handle.abort();
        }
    }
}

impl Drop for CatalogStore {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("settings", &self.inner.settings)
            .field("shutdown", &self.inner.shutdown.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl CatalogInner {
    fn lock_state(&self) -> std::sync::MutexGuard<'_, CatalogScreenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 替换整个状态，有变化时发布
    fn commit(&self, next: CatalogScreenState) {
        let mut state = self.lock_state();
        if *state != next {
            *state = next.clone();
            self.updates.publish(next);
        }
    }

    /// 在 `Success` 状态下修改视图，其余状态忽略
    ///
    /// 返回是否处于 `Success`。
    fn update(&self, f: impl FnOnce(&mut CatalogView)) -> bool {
        let mut state = self.lock_state();
        let CatalogScreenState::Success(view) = &mut *state else {
            tracing::trace!("Catalog not loaded, operation ignored");
            return false;
        };

        let before = view.clone();
        f(&mut **view);
        if **view != *before {
            self.updates.publish(state.clone());
        }
        true
    }
}
