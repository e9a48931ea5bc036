//! Pokecards - Pokemon TCG API 代理服务

use std::sync::Arc;

use pokecards::config::{load_config, print_config, LogConfig};
use pokecards::infrastructure::adapters::{HttpCatalogClient, HttpCatalogClientConfig};
use pokecards::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},pokecards={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Pokecards - Pokemon TCG API proxy");
    print_config(&config);

    // 创建上游客户端
    let catalog_config = HttpCatalogClientConfig::new(
        config.upstream.base_url.clone(),
        config.upstream.api_key.clone(),
    )
    .with_timeout(config.upstream.timeout_secs);
    let catalog = Arc::new(HttpCatalogClient::new(catalog_config)?);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(catalog));

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
