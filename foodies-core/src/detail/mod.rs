//! 商品详情界面

pub mod store;

pub use store::{ProductDetailState, ProductDetailStore};
