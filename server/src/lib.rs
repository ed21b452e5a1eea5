//! # MyKugy Static Server
//!
//! Serves the built front door (`dist/`) with a single-page-app fallback: any path
//! that is not a file, such as `/auth/callback` or `/menu`, gets `index.html` so the
//! client-side router can take over.

pub mod config;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::{Config, ConfigError};

/// Build the router for `config.dist_dir`
pub fn build_router(config: &Config) -> Router {
    let static_files = ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/healthz", get(health))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

/// Install the global tracing subscriber. Unknown levels fall back to `info`.
pub fn init_tracing(log_level: &str) {
    let level = match log_level {
        "trace" | "debug" | "info" | "warn" | "error" => log_level,
        _ => "info",
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

/// Bind and serve until the process is stopped
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let app = build_router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    info!("MyKugy front door running at http://{}", config.bind_address);
    info!("Serving from {}", config.dist_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::path::Path;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>front door</body></html>";

    fn test_config(dist: &Path) -> Config {
        Config {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            dist_dir: dist.to_path_buf(),
            log_level: "debug".to_string(),
        }
    }

    fn write_dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("mykugy-web_bg.wasm"), b"\0asm").unwrap();
        dir
    }

    async fn get_path(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, content_type, body)
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dist = write_dist();
        let (status, _, body) = get_path(build_router(&test_config(dist.path())), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX.as_bytes());
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dist = write_dist();
        let app = build_router(&test_config(dist.path()));

        for uri in ["/auth/callback?token=abc&email=a%40b.com", "/menu?email=a%40b.com&credits=40"] {
            let (status, content_type, body) = get_path(app.clone(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(content_type.unwrap_or_default().starts_with("text/html"), "{uri}");
            assert_eq!(body, INDEX.as_bytes(), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_assets_are_served_as_is() {
        let dist = write_dist();
        let (status, content_type, body) =
            get_path(build_router(&test_config(dist.path())), "/mykugy-web_bg.wasm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/wasm"));
        assert_eq!(body, b"\0asm");
    }

    #[tokio::test]
    async fn test_healthz() {
        let dist = write_dist();
        let (status, _, body) = get_path(build_router(&test_config(dist.path())), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }
}
