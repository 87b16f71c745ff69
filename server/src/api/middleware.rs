//! HTTP middleware (CORS, 404 handler)

use axum::extract::Request;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allowed origins configuration
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    /// Create allowed origins from host and port configuration.
    /// The admin UI dev server runs on `port + 1`.
    pub fn new(host: &str, port: u16) -> Self {
        let dev_port = port + 1;
        let base_hosts: Vec<&str> = if host == "0.0.0.0" || host == "127.0.0.1" || host == "localhost"
        {
            vec!["localhost", "127.0.0.1"]
        } else {
            vec![host]
        };

        let mut origins = Vec::new();
        for h in &base_hosts {
            origins.push(format!("http://{}:{}", h, port));
            origins.push(format!("http://{}:{}", h, dev_port));
        }

        Self { origins }
    }

    fn as_header_values(&self) -> Vec<HeaderValue> {
        self.origins.iter().filter_map(|o| o.parse().ok()).collect()
    }
}

/// Create CORS layer
pub fn cors(allowed: &AllowedOrigins) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed.as_header_values()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
}

/// Handle 404 Not Found with logging
pub async fn handle_404(req: Request) -> impl IntoResponse {
    tracing::debug!(method = %req.method(), uri = %req.uri(), "No route matched");
    StatusCode::NOT_FOUND
}
