//! 工具模块 - 日志初始化等通用工具

pub mod logger;
