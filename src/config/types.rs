//! Configuration Types

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 上游 API 配置
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8888
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 上游 Pokemon TCG API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API Key，缺失不校验（上游会返回认证错误）
    #[serde(default)]
    pub api_key: String,

    /// 请求超时时间（秒），0 表示不设置
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.pokemontcg.io/v2".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: 0,
        }
    }
}

impl UpstreamConfig {
    /// 用于日志输出的 API Key（只显示末尾 4 位）
    pub fn masked_api_key(&self) -> String {
        if self.api_key.is_empty() {
            return "<unset>".to_string();
        }
        let chars: Vec<char> = self.api_key.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("****{}", tail)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8888);
        assert_eq!(config.upstream.base_url, "https://api.pokemontcg.io/v2");
        assert!(config.upstream.api_key.is_empty());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(ServerConfig::default().addr(), "0.0.0.0:8888");
    }

    #[test]
    fn test_masked_api_key() {
        let mut upstream = UpstreamConfig::default();
        assert_eq!(upstream.masked_api_key(), "<unset>");

        upstream.api_key = "abcdef-1234".to_string();
        assert_eq!(upstream.masked_api_key(), "****1234");

        upstream.api_key = "xy".to_string();
        assert_eq!(upstream.masked_api_key(), "****xy");
    }
}
