//! Application assembly
//!
//! Builds the pool, prepares the schema and wires the HTTP stack. Kept apart
//! from `main` so startup can be exercised without binding a socket.

use axum::{Router, http::Method};
use contact::{PgContactRepository, contact_router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

/// Build the application router from configuration
///
/// Schema initialization is awaited here, before the caller binds a listener.
/// A failure is logged and the router is still returned; requests then report
/// store errors until the database becomes reachable.
pub async fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    // Connections are opened on first use, so an unreachable database
    // does not stop the listener from coming up
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .connect_lazy(&config.database_url)?;

    let repo = PgContactRepository::new(pool);

    if let Err(e) = repo.initialize_schema().await {
        e.log();
        tracing::warn!("Continuing startup without the contacts table");
    }

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::any());

    Ok(Router::new()
        .nest("/api/contacts", contact_router(repo))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    /// Nothing listens on port 1, so every connection attempt is refused
    fn unreachable_config() -> ApiConfig {
        ApiConfig {
            port: 0,
            database_url: "postgres://contacts@127.0.0.1:1/contacts".to_string(),
            database_max_connections: 1,
            database_acquire_timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn test_unreachable_database_still_builds_app() {
        let app = build_app(&unreachable_config())
            .await
            .expect("schema failure must not abort startup");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/contacts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Failed to fetch contacts"}));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = build_app(&unreachable_config()).await.unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/contacts")
                    .header("origin", "http://frontend.example")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
