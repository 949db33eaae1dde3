//! Client configuration

/// Default collection paths, relative to the base URL
pub const CATEGORIES_PATH: &str = "Categories.json";
pub const PRODUCTS_PATH: &str = "Products.json";
pub const TAGS_PATH: &str = "Tags.json";

/// Client configuration for connecting to the catalog endpoint
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Path of the categories collection
    pub categories_path: String,

    /// Path of the products collection
    pub products_path: String,

    /// Path of the tags collection
    pub tags_path: String,
}

impl ClientConfig {
    /// Create a new client configuration with the default collection paths
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            categories_path: CATEGORIES_PATH.to_string(),
            products_path: PRODUCTS_PATH.to_string(),
            tags_path: TAGS_PATH.to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Override the three collection paths
    pub fn with_paths(
        mut self,
        categories: impl Into<String>,
        products: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        self.categories_path = categories.into();
        self.products_path = products.into();
        self.tags_path = tags.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_paths() {
        let config = ClientConfig::default();
        assert_eq!(config.categories_path, "Categories.json");
        assert_eq!(config.products_path, "Products.json");
        assert_eq!(config.tags_path, "Tags.json");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://example.test")
            .with_timeout(5)
            .with_paths("c", "p", "t");

        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.products_path, "p");
    }
}
