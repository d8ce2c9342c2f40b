//! API Configuration
//!
//! Where the backend lives, fixed at build time.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Base URL used when `TODO_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "/api/";

/// Log level used when `TODO_LOG_LEVEL` is not set at build time
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Origin plus path prefix of the todo API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL; a trailing slash is added if missing
    pub fn new(api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        Self { api_url }
    }

    /// Config baked in at build time (`TODO_API_URL`)
    pub fn from_env() -> Self {
        Self::new(option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Resolve a path-only base URL against the page origin
    ///
    /// Absolute URLs are left untouched.
    pub fn with_origin(self, origin: &str) -> Self {
        if self.api_url.starts_with("http://") || self.api_url.starts_with("https://") {
            return self;
        }
        let origin = origin.trim_end_matches('/');
        let path = self.api_url.trim_start_matches('/');
        Self::new(format!("{origin}/{path}"))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Collection endpoint, `<base>todos`
    pub fn todos_url(&self) -> String {
        format!("{}todos", self.api_url)
    }

    /// Single-todo endpoint, `<base>todos/<id>`
    pub fn todo_url(&self, id: &str) -> String {
        format!("{}/{}", self.todos_url(), utf8_percent_encode(id, NON_ALPHANUMERIC))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Maximum log level baked in at build time (`TODO_LOG_LEVEL`)
pub fn log_level() -> log::LevelFilter {
    option_env!("TODO_LOG_LEVEL")
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .parse()
        .unwrap_or(log::LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash() {
        assert_eq!(ApiConfig::new("http://localhost:4567/api").api_url(), "http://localhost:4567/api/");
        assert_eq!(ApiConfig::new("/api/").api_url(), "/api/");
    }

    #[test]
    fn test_urls() {
        let config = ApiConfig::new("http://localhost:4567/api/");
        assert_eq!(config.todos_url(), "http://localhost:4567/api/todos");
        assert_eq!(
            config.todo_url("58af3a600343927e48e8720f"),
            "http://localhost:4567/api/todos/58af3a600343927e48e8720f"
        );
        assert_eq!(config.todo_url("a/b"), "http://localhost:4567/api/todos/a%2Fb");
    }

    #[test]
    fn test_with_origin() {
        let config = ApiConfig::new("/api/").with_origin("http://localhost:8080/");
        assert_eq!(config.api_url(), "http://localhost:8080/api/");

        let absolute = ApiConfig::new("https://todos.example.com/api/");
        assert_eq!(absolute.clone().with_origin("http://localhost:8080"), absolute);
    }
}
