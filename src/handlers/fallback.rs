use axum::{http::Uri, response::IntoResponse, response::Response};
use crate::core::error::UserError;
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    UserError::UnknownRoute(uri.path().to_string()).into_response()
}
