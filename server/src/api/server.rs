//! API server initialization

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{self, AllowedOrigins};
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::{
    care_guidelines, categories, colors, fertilizer_schedules, fertilizers, health, plants,
    size_profiles, tag_groups, tags, variant_tags, variants,
};
use crate::core::CoreApp;
use crate::core::constants::DEFAULT_BODY_LIMIT;
use crate::data::MemoryStore;

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let allowed_origins = AllowedOrigins::new(&app.config.server.host, app.config.server.port);

        Self {
            app,
            allowed_origins,
        }
    }

    pub async fn start(self) -> Result<()> {
        let Self {
            app,
            allowed_origins,
        } = self;

        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(host.parse()?, port);

        let app_router = router(app.store.clone(), &allowed_origins);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "API server listening");

        axum::serve(listener, app_router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Build the full application router
pub fn router(store: Arc<MemoryStore>, allowed_origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/docs", get(swagger_ui_html))
        .route("/api/docs/", get(swagger_ui_html))
        .nest("/api/plants", plants::routes(store.clone()))
        .nest("/api/categories", categories::routes(store.clone()))
        .nest("/api/colors", colors::routes(store.clone()))
        .nest("/api/tag-groups", tag_groups::routes(store.clone()))
        .nest("/api/tags", tags::routes(store.clone()))
        .nest("/api/fertilizers", fertilizers::routes(store.clone()))
        .nest("/api/variants", variants::routes(store.clone()))
        .nest("/api/size-profiles", size_profiles::routes(store.clone()))
        .nest(
            "/api/care-guidelines",
            care_guidelines::routes(store.clone()),
        )
        .nest(
            "/api/fertilizer-schedules",
            fertilizer_schedules::routes(store.clone()),
        )
        .nest("/api/variant-tags", variant_tags::routes(store))
        .fallback(middleware::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(middleware::cors(allowed_origins))
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn test_router() -> Router {
        let store = Arc::new(MemoryStore::new());
        let allowed = AllowedOrigins::new("127.0.0.1", 5170);
        router(store, &allowed)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                builder.body(Body::from(json.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router, uri: &str, body: Value) -> Value {
        let (status, created) = send(app, Method::POST, uri, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", created);
        created
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_router();
        let (status, body) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_router();
        let (status, _) = send(&app, Method::GET, "/api/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn plant_crud_lifecycle() {
        let app = test_router();

        let plant = create(&app, "/api/plants", json!({"name": "Monstera Deliciosa"})).await;
        let id = plant["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert!(plant["createdAt"].is_string());
        assert_eq!(plant["isActive"], true);

        let (status, fetched) =
            send(&app, Method::GET, &format!("/api/plants/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Monstera Deliciosa");

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/api/plants/{}", id),
            Some(json!({"scientificName": "Monstera deliciosa"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Monstera Deliciosa");
        assert_eq!(updated["scientificName"], "Monstera deliciosa");

        let (status, deleted) =
            send(&app, Method::DELETE, &format!("/api/plants/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["message"], "Plant deleted successfully");

        let (status, body) =
            send(&app, Method::DELETE, &format!("/api/plants/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "PLANT_NOT_FOUND");
    }

    #[tokio::test]
    async fn plant_without_name_is_rejected() {
        let app = test_router();
        let (status, body) =
            send(&app, Method::POST, "/api/plants", Some(json!({"careLevel": "Easy"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");

        // The rejected create must not have touched the store
        let (_, plants) = send(&app, Method::GET, "/api/plants", None).await;
        assert_eq!(plants.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn plant_with_unknown_category_is_rejected() {
        let app = test_router();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/plants",
            Some(json!({"name": "Tulsi", "categoryId": "missing"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_CATEGORY");
    }

    #[tokio::test]
    async fn temperature_invariant_checked_on_merged_record() {
        let app = test_router();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/plants",
            Some(json!({"name": "Fern", "temperatureMin": 30, "temperatureMax": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let plant = create(
            &app,
            "/api/plants",
            json!({"name": "Fern", "temperatureMin": 10, "temperatureMax": 25}),
        )
        .await;
        let id = plant["id"].as_str().unwrap();

        // patch alone looks fine, merged record does not
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/plants/{}", id),
            Some(json!({"temperatureMin": 30})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_TEMPERATURE_RANGE");
    }

    #[tokio::test]
    async fn duplicate_sku_conflicts() {
        let app = test_router();
        let plant = create(&app, "/api/plants", json!({"name": "Monstera"})).await;
        let color = create(
            &app,
            "/api/colors",
            json!({"name": "Green", "hexCode": "#2e7d32"}),
        )
        .await;
        let plant_id = plant["id"].as_str().unwrap();
        let color_id = color["id"].as_str().unwrap();

        let variant = json!({
            "plantId": plant_id,
            "colorId": color_id,
            "sku": "MON-GRN-1",
            "price": 499.0
        });
        create(&app, "/api/variants", variant.clone()).await;

        let (status, body) =
            send(&app, Method::POST, "/api/variants", Some(variant)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "DUPLICATE_SKU");
    }

    #[tokio::test]
    async fn update_of_missing_variant_reports_not_found() {
        let app = test_router();

        // The missing id wins over the bad reference in the body
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/variants/missing",
            Some(json!({"plantId": "also-missing", "sku": "MON-GRN-4IN"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "VARIANT_NOT_FOUND");
    }

    #[tokio::test]
    async fn variant_listing_filters_by_plant() {
        let app = test_router();
        let monstera = create(&app, "/api/plants", json!({"name": "Monstera"})).await;
        let tulsi = create(&app, "/api/plants", json!({"name": "Tulsi"})).await;
        let color = create(
            &app,
            "/api/colors",
            json!({"name": "Green", "hexCode": "#2e7d32"}),
        )
        .await;
        let color_id = color["id"].as_str().unwrap();

        for (plant, sku) in [(&monstera, "MON-1"), (&monstera, "MON-2"), (&tulsi, "TUL-1")] {
            create(
                &app,
                "/api/variants",
                json!({
                    "plantId": plant["id"],
                    "colorId": color_id,
                    "sku": sku,
                    "price": 199.0
                }),
            )
            .await;
        }

        let uri = format!("/api/variants?plantId={}", monstera["id"].as_str().unwrap());
        let (status, list) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 2);

        let (_, all) = send(&app, Method::GET, "/api/variants", None).await;
        assert_eq!(all.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn care_guideline_rejects_unknown_season() {
        let app = test_router();
        let plant = create(&app, "/api/plants", json!({"name": "Monstera"})).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/care-guidelines",
            Some(json!({"plantId": plant["id"], "season": "Autumn"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, guideline) = send(
            &app,
            Method::POST,
            "/api/care-guidelines",
            Some(json!({"plantId": plant["id"], "season": "Monsoon"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(guideline["season"], "Monsoon");
    }

    #[tokio::test]
    async fn deleting_category_leaves_plants_pointing_at_it() {
        let app = test_router();
        let category = create(&app, "/api/categories", json!({"name": "Indoor"})).await;
        let category_id = category["id"].as_str().unwrap().to_string();
        let plant = create(
            &app,
            "/api/plants",
            json!({"name": "Monstera", "categoryId": category_id}),
        )
        .await;

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/categories/{}", category_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, fetched) = send(
            &app,
            Method::GET,
            &format!("/api/plants/{}", plant["id"].as_str().unwrap()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["categoryId"], category_id);

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/categories/{}", category_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn variant_tag_requires_existing_variant_and_tag() {
        let app = test_router();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/variant-tags",
            Some(json!({"variantId": "missing", "tagId": "missing"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_VARIANT");
    }

    #[tokio::test]
    async fn tag_requires_existing_group() {
        let app = test_router();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/tags",
            Some(json!({"name": "Low light", "tagGroupId": "missing"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_TAG_GROUP");

        let group = create(&app, "/api/tag-groups", json!({"name": "Light"})).await;
        let (status, tag) = send(
            &app,
            Method::POST,
            "/api/tags",
            Some(json!({"name": "Low light", "tagGroupId": group["id"]})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(tag["tagGroupId"], group["id"]);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = test_router();
        let (status, doc) = send(&app, Method::GET, "/api/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["info"]["title"], "PlantDesk API");
        assert!(doc["paths"]["/api/plants"].is_object());
    }
}
