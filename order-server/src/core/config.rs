use std::net::SocketAddr;
use std::time::Duration;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | APP_NAME | orderApp | 提示头前缀 (X-{app}-alert) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | - | 滚动日志目录 |
/// | LOG_RETENTION_DAYS | 14 | 日志保留天数 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | MAX_BODY_BYTES | 1048576 | 请求体上限 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=9000 APP_NAME=backApp cargo run -p order-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    /// Prefix of the alert headers read by the ordering UI
    pub app_name: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub log_retention_days: u32,
    pub request_timeout_ms: u64,
    pub max_body_bytes: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_parse("HTTP_PORT", 8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            app_name: std::env::var("APP_NAME").unwrap_or_else(|_| "orderApp".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON", false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_retention_days: env_parse("LOG_RETENTION_DAYS", 14),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30_000),
            max_body_bytes: env_parse("MAX_BODY_BYTES", 1024 * 1024),
        }
    }

    /// Socket address the HTTP server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.http_host, self.http_port).parse()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let mut config = Config::default();
        config.http_port = 18080;
        config.http_host = "127.0.0.1".into();
        let addr = config.bind_addr().unwrap();
        assert_eq!(addr.port(), 18080);
        assert!(addr.ip().is_loopback());

        config.http_host = "not an ip".into();
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        assert_eq!(env_parse("ORDER_SERVER_TEST_UNSET_KEY", 42u16), 42);
    }

    #[test]
    fn test_request_timeout() {
        let mut config = Config::default();
        config.request_timeout_ms = 1500;
        assert_eq!(config.request_timeout(), Duration::from_millis(1500));
    }
}
