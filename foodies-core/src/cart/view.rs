//! 购物车界面状态

use serde::{Deserialize, Serialize};

use shared::cart::{CartEntry, CartSnapshot};
use shared::models::Product;
use shared::util::format_price;

use super::{CartMirror, CartStore};

/// 购物车界面显示的数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartViewState {
    pub entries: Vec<CartEntry>,
    pub total_price: i64,
}

impl CartViewState {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 总价显示文本，例如 "1440.00"
    pub fn formatted_total(&self) -> String {
        format_price(self.total_price)
    }
}

impl From<CartSnapshot> for CartViewState {
    fn from(snapshot: CartSnapshot) -> Self {
        Self {
            entries: snapshot.entries,
            total_price: snapshot.total_price,
        }
    }
}

/// 购物车界面
///
/// 读取走镜像，写入走 [`CartStore`]。
#[derive(Debug)]
pub struct CartView {
    cart: CartStore,
    mirror: CartMirror,
}

impl CartView {
    pub fn new(cart: CartStore) -> Self {
        let mirror = CartMirror::new(cart.bus());
        Self { cart, mirror }
    }

    pub fn state(&self) -> CartViewState {
        self.mirror.snapshot().into()
    }

    pub fn formatted_total(&self) -> String {
        self.state().formatted_total()
    }

    pub fn delete_product(&self, product: Product) {
        self.cart.delete_product(product);
    }

    pub fn increment(&self, product: Product) {
        self.cart.increment(product);
    }

    pub fn decrement(&self, product: Product) {
        self.cart.decrement(product);
    }
}
