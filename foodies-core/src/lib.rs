//! Foodies Core - 点餐客户端状态核心
//!
//! # 架构概述
//!
//! - **目录** (`catalog`): 三路拉取、结果聚合、分类/搜索/筛选状态机
//! - **购物车** (`cart`): 串行化的购物车 store，每次变更发布完整快照
//! - **消息总线** (`message`): 带最新值回放的进程内广播
//! - **商品详情** (`detail`): 订阅购物车快照的详情界面状态
//! - **会话** (`core`): 配置、会话作用域、依赖装配
//!
//! # 模块结构
//!
//! ```text
//! foodies-core/src/
//! ├── core/          # 配置、会话
//! ├── utils/         # 日志
//! ├── message/       # 回放总线
//! ├── catalog/       # 目录拉取与筛选
//! ├── cart/          # 购物车 store 与 appliers
//! └── detail/        # 商品详情状态
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod detail;
pub mod message;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export 公共类型
pub use cart::{CartMirror, CartStore, CartView, CartViewState};
pub use catalog::{
    CatalogFetcher, CatalogFilter, CatalogScreenState, CatalogStore, CatalogView, FilterTags,
    SelectedFilters,
};
pub use crate::core::{Config, Session, SessionError};
pub use detail::{ProductDetailState, ProductDetailStore};
pub use message::{EventBus, Subscription};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ______                ___
   / ____/___  ____  ____/ (_)__  _____
  / /_  / __ \/ __ \/ __  / / _ \/ ___/
 / __/ / /_/ / /_/ / /_/ / /  __(__  )
/_/    \____/\____/\__,_/_/\___/____/
    "#
    );
}
