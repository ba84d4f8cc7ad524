// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{fallback, health, user};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/user", post(user::create_user_handler))
        .route(
            "/user/{id}",
            get(user::get_user_handler)
                .put(user::update_user_handler)
                .delete(user::delete_user_handler),
        )
        .route("/health", get(health::health_handler))
        .fallback(fallback::fallback_handler)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::models::response::{ErrorResponse, SuccessResponse};
    use crate::models::user::UserResponse;
    use crate::stores::memory_store::MemoryUserStore;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = Config::from_toml("[database]\nbackend = \"memory\"").unwrap();
        let state = AppState::new(config, Arc::new(MemoryUserStore::new()));
        build_router(Arc::new(state))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> Response {
        let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        router.clone().oneshot(request).await.unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_get_delete_scenario() {
        let router = test_router();

        let response = send(
            &router,
            Method::POST,
            "/user",
            Some(r#"{"name":"Ann","gender":"F","age":30}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: UserResponse = read_json(response).await;
        assert_eq!(created.id.len(), 24);
        assert_eq!((created.name.as_str(), created.gender.as_str(), created.age), ("Ann", "F", 30));

        let path = format!("/user/{}", created.id);

        let response = send(&router, Method::GET, &path, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: UserResponse = read_json(response).await;
        assert_eq!(fetched, created);

        let response = send(&router, Method::DELETE, &path, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let deleted: SuccessResponse = read_json(response).await;
        assert!(deleted.success);

        let response = send(&router, Method::GET, &path, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = read_json(response).await;
        assert!(!error.success);
    }

    #[tokio::test]
    async fn test_update_then_get_reflects_full_replace() {
        let router = test_router();

        let response = send(
            &router,
            Method::POST,
            "/user",
            Some(r#"{"name":"Ann","gender":"F","age":30}"#),
        )
        .await;
        let created: UserResponse = read_json(response).await;
        let path = format!("/user/{}", created.id);

        let response = send(&router, Method::PUT, &path, Some(r#"{"name":"A"}"#)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let fetched: UserResponse = read_json(send(&router, Method::GET, &path, None).await).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "A");
        assert_eq!(fetched.gender, "");
        assert_eq!(fetched.age, 0);
    }

    #[tokio::test]
    async fn test_nonexistent_id_table() {
        let router = test_router();
        let path = "/user/65a1f0c2e4b0a1b2c3d4e5f6";

        assert_eq!(send(&router, Method::GET, path, None).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            send(&router, Method::PUT, path, Some(r#"{"name":"A"}"#)).await.status(),
            StatusCode::OK
        );
        assert_eq!(send(&router, Method::DELETE, path, None).await.status(), StatusCode::OK);
        assert_eq!(send(&router, Method::DELETE, path, None).await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_bad_bodies_are_bad_request() {
        let router = test_router();

        let response = send(&router, Method::POST, "/user", Some("{\"name\":")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&router, Method::POST, "/user", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &router,
            Method::PUT,
            "/user/65a1f0c2e4b0a1b2c3d4e5f6",
            Some(r#"{"age":"x"}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let router = test_router();

        for method in [Method::GET, Method::DELETE] {
            let response = send(&router, method, "/user/xyz", None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        let response = send(&router, Method::PUT, "/user/xyz", Some("{}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_utf8_id_is_not_found_with_json_body() {
        let router = test_router();

        for (method, body) in [
            (Method::GET, None),
            (Method::PUT, Some(r#"{"name":"A"}"#)),
            (Method::DELETE, None),
        ] {
            let response = send(&router, method.clone(), "/user/%FF", body).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");

            let error: ErrorResponse = read_json(response).await;
            assert!(!error.success);
        }
    }

    #[tokio::test]
    async fn test_health_and_fallback() {
        let router = test_router();

        let response = send(&router, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let health: serde_json::Value = read_json(response).await;
        assert_eq!(health["collection"], "users");

        let response = send(&router, Method::GET, "/users", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.error, "Invalid endpoint: /users");
    }
}
