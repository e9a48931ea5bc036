//! Configuration Loader
//!
//! 优先级（从高到低）：
//! 1. `POKEMON_TCG_API_KEY`（仅覆盖 upstream.api_key）
//! 2. 环境变量 `POKECARDS_*`
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 上游 API Key 的环境变量
pub const API_KEY_ENV: &str = "POKEMON_TCG_API_KEY";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `POKECARDS_SERVER__PORT=8080`
/// - `POKECARDS_UPSTREAM__BASE_URL=http://localhost:9000/v2`
/// - `POKEMON_TCG_API_KEY=...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8888)?
        .set_default("upstream.base_url", "https://api.pokemontcg.io/v2")?
        .set_default("upstream.api_key", "")?
        .set_default("upstream.timeout_secs", 0)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 例如: POKECARDS_UPSTREAM__TIMEOUT_SECS=10
    builder = builder.add_source(
        Environment::with_prefix("POKECARDS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    if let Ok(api_key) = std::env::var(API_KEY_ENV) {
        builder = builder.set_override("upstream.api_key", api_key)?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.upstream.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Upstream base URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Upstream URL: {}", config.upstream.base_url);
    tracing::info!("Upstream API Key: {}", config.upstream.masked_api_key());
    if config.upstream.timeout_secs > 0 {
        tracing::info!("Upstream Timeout: {}s", config.upstream.timeout_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");

    if config.upstream.api_key.is_empty() {
        tracing::warn!("{} is not set, upstream requests will be unauthenticated", API_KEY_ENV);
    }
}
