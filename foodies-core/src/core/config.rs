use std::time::Duration;

use foodies_client::ClientConfig;

use crate::catalog::FilterTags;

/// 客户端配置 - 会话的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | FOODIES_API_URL | http://localhost:8080 | 目录接口地址 |
/// | FOODIES_REQUEST_TIMEOUT_SECS | 30 | 请求超时(秒) |
/// | SEARCH_DEBOUNCE_MS | 300 | 搜索防抖(毫秒) |
/// | EVENT_BUS_CAPACITY | 64 | 消息总线缓冲 |
/// | VEGETARIAN_TAG_NAME | vegetarian dish | "no-meat" 筛选对应的标签名 |
/// | SPICY_TAG_NAME | spicy | "spicy" 筛选对应的标签名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志 |
/// | LOG_DIR | (无) | 日志文件目录 |
///
/// # 示例
///
/// ```ignore
/// FOODIES_API_URL=https://example.com/api SEARCH_DEBOUNCE_MS=500 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 目录接口基础地址
    pub api_base_url: String,
    /// 请求超时时间 (秒)
    pub request_timeout_secs: u64,
    /// 搜索防抖时间 (毫秒)
    pub search_debounce_ms: u64,
    /// 消息总线广播通道容量
    pub event_bus_capacity: usize,
    /// 筛选使用的标签名 (按名称精确匹配)
    pub filter_tags: FilterTags,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志文件目录 (None 表示仅控制台)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let defaults = FilterTags::default();
        Self {
            api_base_url: std::env::var("FOODIES_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            request_timeout_secs: std::env::var("FOODIES_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            search_debounce_ms: std::env::var("SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            event_bus_capacity: std::env::var("EVENT_BUS_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&c: &usize| c > 0)
                .unwrap_or(64),
            filter_tags: FilterTags {
                vegetarian: std::env::var("VEGETARIAN_TAG_NAME").unwrap_or(defaults.vegetarian),
                spicy: std::env::var("SPICY_TAG_NAME").unwrap_or(defaults.spicy),
            },
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 使用自定义接口地址覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_api_url(api_base_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.api_base_url = api_base_url.into();
        config
    }

    /// 搜索防抖时长
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// 生成 HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone()).with_timeout(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".into(),
            request_timeout_secs: 30,
            search_debounce_ms: 300,
            event_bus_capacity: 64,
            filter_tags: FilterTags::default(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}
