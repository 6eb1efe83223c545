//! Static file server for a built frontend bundle.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Router serving `dist_dir`; unknown paths get `index.html` so the client router resolves them.
pub fn create_router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");
    Router::new().fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn body_of(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_serves_assets() {
        let dir = dist();
        let (status, body) = body_of(create_router(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = dist();
        for uri in ["/", "/article/hello", "/tag/rust", "/page/2"] {
            let (status, body) = body_of(create_router(dir.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, "<html>app</html>", "{uri}");
        }
    }
}
