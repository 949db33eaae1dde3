//! ProductDetailStore - 商品详情界面状态
//!
//! 持有当前选中的商品和本界面的购物车副本。购物车写入全部转发给
//! [`CartStore`]，读取来自总线快照。

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use shared::cart::CartSnapshot;
use shared::models::Product;

use crate::cart::{CartMirror, CartStore};

/// 详情界面显示的数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetailState {
    pub selected_product: Option<Product>,
    pub products_in_cart: CartSnapshot,
}

impl ProductDetailState {
    /// 选中商品在购物车中的数量 ("已在购物车: N")
    pub fn quantity_in_cart(&self) -> u32 {
        self.selected_product
            .as_ref()
            .map(|p| self.products_in_cart.quantity_of(p.id))
            .unwrap_or(0)
    }
}

/// 商品详情 store
#[derive(Debug)]
pub struct ProductDetailStore {
    selected: Mutex<Option<Product>>,
    cart: CartStore,
    mirror: CartMirror,
}

impl ProductDetailStore {
    pub fn new(cart: CartStore) -> Self {
        let mirror = CartMirror::new(cart.bus());
        Self {
            selected: Mutex::new(None),
            cart,
            mirror,
        }
    }

    pub fn select_product(&self, product: Product) {
        tracing::debug!(product_id = product.id, name = %product.name, "Product selected");
        *self.selected.lock().unwrap_or_else(PoisonError::into_inner) = Some(product);
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.selected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> ProductDetailState {
        ProductDetailState {
            selected_product: self.selected_product(),
            products_in_cart: self.mirror.snapshot(),
        }
    }

    /// 选中商品在购物车中的数量，没有选中时为 0
    pub fn quantity_in_cart(&self) -> u32 {
        self.selected_product()
            .map(|p| self.mirror.quantity_of(p.id))
            .unwrap_or(0)
    }

    pub fn is_in_cart(&self) -> bool {
        self.quantity_in_cart() > 0
    }

    pub fn add_to_cart(&self, product: Product) -> CartSnapshot {
        self.cart.add_product(product)
    }

    pub fn delete_from_cart(&self, product: Product) -> CartSnapshot {
        self.cart.delete_product(product)
    }

    pub fn increment(&self, product: Product) -> CartSnapshot {
        self.cart.increment(product)
    }

    pub fn decrement(&self, product: Product) -> CartSnapshot {
        self.cart.decrement(product)
    }
}
