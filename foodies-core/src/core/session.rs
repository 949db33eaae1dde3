//! Session - 会话作用域
//!
//! 会话创建并持有购物车消息总线，再把它注入到每个界面的 store。
//! 同一会话内的所有界面共享同一个 [`CartStore`]，关闭会话时取消
//! 所有由会话派生的后台任务。
//!
//! ```text
//! Session
//!   ├── bus: EventBus<BusMessage>   (回放最新购物车快照)
//!   ├── cart: CartStore             (唯一写入路径)
//!   ├── api: Arc<dyn CatalogApi>
//!   └── shutdown: CancellationToken
//!         │
//!         ├──► CatalogStore      (child token)
//!         ├──► ProductDetailStore
//!         └──► CartView
//! ```

use std::sync::Arc;

use foodies_client::{CatalogApi, ClientError};
use shared::message::BusMessage;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::Config;
use crate::cart::{CartStore, CartView};
use crate::catalog::{CatalogFetcher, CatalogSettings, CatalogStore};
use crate::detail::ProductDetailStore;
use crate::message::EventBus;

/// 会话错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("客户端初始化失败: {0}")]
    Client(#[from] ClientError),
}

/// 会话作用域
pub struct Session {
    config: Config,
    bus: EventBus<BusMessage>,
    cart: CartStore,
    api: Arc<dyn CatalogApi>,
    shutdown: CancellationToken,
}

impl Session {
    /// 使用给定的目录接口创建会话
    pub fn new(config: Config, api: Arc<dyn CatalogApi>) -> Self {
        let bus = EventBus::with_capacity(config.event_bus_capacity);
        let cart = CartStore::new(bus.clone());
        Self {
            config,
            bus,
            cart,
            api,
            shutdown: CancellationToken::new(),
        }
    }

    /// 按配置创建 HTTP 客户端并建立会话
    pub fn connect(config: Config) -> Result<Self, SessionError> {
        let client = config.client_config().build_http_client()?;
        tracing::info!(base_url = %config.api_base_url, "Session connected");
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 购物车消息总线
    pub fn bus(&self) -> &EventBus<BusMessage> {
        &self.bus
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// 创建目录界面 store (未开始拉取)
    pub fn catalog_store(&self) -> CatalogStore {
        CatalogStore::new(
            CatalogFetcher::new(Arc::clone(&self.api)),
            self.cart.clone(),
            CatalogSettings::from(&self.config),
            &self.shutdown,
        )
    }

    /// 创建目录界面 store 并立即开始拉取
    pub fn open_catalog(&self) -> CatalogStore {
        let store = self.catalog_store();
        store.load();
        store
    }

    pub fn product_detail(&self) -> ProductDetailStore {
        ProductDetailStore::new(self.cart.clone())
    }

    pub fn cart_view(&self) -> CartView {
        CartView::new(self.cart.clone())
    }

    /// 关闭会话，取消所有派生 store 的后台任务
    pub fn shutdown(&self) {
        if !self.shutdown.is_cancelled() {
            tracing::info!("Session shutting down");
            self.shutdown.cancel();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("bus", &self.bus)
            .field("cart", &self.cart)
            .field("shut_down", &self.shutdown.is_cancelled())
            .finish_non_exhaustive()
    }
}
