//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::{info, Level};

use super::middleware::{access_log_middleware, cors_middleware};
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建完整的 Router
///
/// CORS 中间件在最外层，OPTIONS 不会进入路由匹配。
/// 失败响应由 `ApiError` 记录，TraceLayer 的失败事件降为 debug。
pub fn build_router(state: Arc<AppState>) -> Router {
    create_routes()
        .layer(middleware::from_fn(access_log_middleware))
        .layer(TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::DEBUG)))
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone());
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeCatalogClient;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn router_with(fake: Arc<FakeCatalogClient>) -> Router {
        build_router(Arc::new(AppState::new(fake)))
    }

    async fn send(app: Router, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(ServerConfig::default().addr(), "0.0.0.0:8888");
        assert_eq!(ServerConfig::new("127.0.0.1", 3000).addr(), "127.0.0.1:3000");
    }

    #[tokio::test]
    async fn test_options_on_every_handler_skips_upstream() {
        let fake = Arc::new(FakeCatalogClient::new());

        for uri in [
            "/api/pokemon/sets?page=2",
            "/api/pokemon/cards",
            "/api/pokemon/search?q=char",
            "/.netlify/functions/pokemon-cards?setId=base1",
        ] {
            let response = send(router_with(fake.clone()), Method::OPTIONS, uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
                "GET, POST, OPTIONS"
            );
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(body.is_empty());
        }

        assert_eq!(fake.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_sets_identity_projection() {
        let set = json!({
            "id": "base1",
            "name": "Base",
            "series": "Base",
            "total": 102,
            "releaseDate": "1999-01-09",
            "images": {"symbol": "https://images.example/base1/symbol.png"},
            "legalities": {"unlimited": "Legal"}
        });
        let fake = Arc::new(FakeCatalogClient::new().with_sets(json!({
            "data": [set.clone()],
            "page": 1, "pageSize": 20, "count": 1, "totalCount": 1
        })));

        let response = send(router_with(fake), Method::GET, "/api/pokemon/sets").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0], set);
        assert_eq!(body["totalCount"], 1);
        assert_eq!(body["pageSize"], 20);
    }

    #[tokio::test]
    async fn test_cards_missing_set_id_is_bad_request() {
        let fake = Arc::new(FakeCatalogClient::new());

        let response = send(router_with(fake.clone()), Method::GET, "/api/pokemon/cards?page=2").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "message": "setId parameter is required"})
        );
        assert_eq!(fake.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_cards_by_set_envelope() {
        let fake = Arc::new(FakeCatalogClient::new().with_cards(json!({
            "data": [{
                "id": "base1-1",
                "name": "Alakazam",
                "set": {"id": "base1", "name": "Base", "series": "Base", "total": 102},
                "images": {"small": "s.png", "large": "l.png"}
            }],
            "page": 1, "pageSize": 250, "count": 1, "totalCount": 1
        })));

        let response = send(
            router_with(fake.clone()),
            Method::POST,
            "/.netlify/functions/pokemon-cards?setId=base1&orderBy=name",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["setInfo"], body["data"][0]["set"]);
        assert_eq!(body["data"][0]["tcgplayer"], Value::Null);
        assert_eq!(
            fake.requests().await,
            vec!["/cards?q=set.id:base1&page=1&pageSize=250&orderBy=name".to_string()]
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_internal_error() {
        for (status, uri, message) in [
            (404, "/api/pokemon/sets", "Errore nel caricamento set Pokemon"),
            (500, "/api/pokemon/cards?setId=base1", "Errore nel caricamento carte Pokemon"),
            (500, "/api/pokemon/search?name=Mew", "Errore nella ricerca carte Pokemon"),
        ] {
            let fake = Arc::new(FakeCatalogClient::failing_with(status));
            let response = send(router_with(fake), Method::GET, uri).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

            let body = json_body(response).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], format!("Pokemon API error: {}", status));
            assert_eq!(body["message"], message);
        }
    }

    #[tokio::test]
    async fn test_search_echoes_query() {
        let fake = Arc::new(FakeCatalogClient::new());

        let response = send(
            router_with(fake.clone()),
            Method::GET,
            "/api/pokemon/search?q=char&set=Base%20Set&pageSize=5",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["query"], "name:\"*char*\" AND set.name:\"Base Set\"");
        assert_eq!(body["data"], json!([]));
        assert_eq!(
            fake.requests().await,
            vec![
                "/cards?q=name%3A%22*char*%22%20AND%20set.name%3A%22Base%20Set%22&page=1&pageSize=5&orderBy=set.releaseDate"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_query_keys_last_value_wins() {
        for (uri, upstream) in [
            (
                "/api/pokemon/sets?page=1&page=2",
                "/sets?page=2&pageSize=20",
            ),
            (
                "/api/pokemon/cards?setId=a&setId=b",
                "/cards?q=set.id:b&page=1&pageSize=250&orderBy=number",
            ),
            (
                "/api/pokemon/search?q=x&q=y",
                "/cards?q=name%3A%22*y*%22&page=1&pageSize=20&orderBy=set.releaseDate",
            ),
        ] {
            let fake = Arc::new(FakeCatalogClient::new());
            let response = send(router_with(fake.clone()), Method::GET, uri).await;

            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
            assert_eq!(json_body(response).await["success"], true);
            assert_eq!(fake.requests().await, vec![upstream.to_string()]);
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn lines_at(&self, level: &str) -> usize {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .filter(|line| line.contains(level))
                .count()
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_is_logged_once() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let fake = Arc::new(FakeCatalogClient::failing_with(500));
        let response = send(router_with(fake), Method::GET, "/api/pokemon/sets").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = Arc::new(FakeCatalogClient::new());
        let response = send(router_with(missing), Method::GET, "/api/pokemon/cards").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(logs.lines_at("ERROR"), 1);
        assert_eq!(logs.lines_at("WARN"), 1);
        assert!(logs.lines_at("HTTP request completed") >= 2);
    }

    #[tokio::test]
    async fn test_ping() {
        let fake = Arc::new(FakeCatalogClient::new());
        let response = send(router_with(fake), Method::GET, "/api/ping").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }
}
