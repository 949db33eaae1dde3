//! 核心模块 - 配置与会话作用域

pub mod config;
pub mod session;

pub use config::Config;
pub use session::{Session, SessionError};
