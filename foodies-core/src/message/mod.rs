//! 消息总线模块
//!
//! 进程内发布/订阅，保留最新一条消息用于新订阅者回放。
//! 会话持有唯一实例，通过构造函数显式注入各界面状态。

pub mod bus;

pub use bus::{DEFAULT_CAPACITY, EventBus, Subscription};
pub use shared::message::BusMessage;
