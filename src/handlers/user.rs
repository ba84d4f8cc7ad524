use crate::core::error::UserError;
use crate::core::state::AppState;
use crate::models::response::SuccessResponse;
use crate::models::user::{User, UserPayload, UserResponse};
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Malformed ids are reported exactly like missing records, including
/// path segments that do not decode to UTF-8
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<(String, ObjectId), UserError> {
    let Path(raw) = path.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Unreadable user id");
        UserError::NotFound(rejection.body_text())
    })?;

    match ObjectId::parse_str(&raw) {
        Ok(oid) => Ok((raw, oid)),
        Err(_) => {
            warn!(user_id = %raw, "Malformed user id");
            Err(UserError::NotFound(raw))
        }
    }
}

fn parse_payload(body: &[u8]) -> Result<UserPayload, UserError> {
    UserPayload::from_slice(body).map_err(|e| {
        warn!(error = %e, "Rejected user payload");
        UserError::BadRequest(e.to_string())
    })
}

/// Fetch a single user
///
/// GET /user/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, UserError> {
    let (id, oid) = parse_id(path)?;

    let user = match state.store.find_one(oid).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(user_id = %id, "User not found");
            return Err(UserError::NotFound(id));
        }
        Err(e) => {
            error!(user_id = %id, error = %e, "Failed to look up user");
            return Err(e.into());
        }
    };

    debug!(user_id = %id, "User fetched");

    Ok((StatusCode::OK, Json(UserResponse::from(&user))).into_response())
}

/// Create a user with a server-generated id
///
/// POST /user
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, UserError> {
    let payload = parse_payload(&body)?;
    let user = User::from_payload(payload);

    if let Err(e) = state.store.insert_one(&user).await {
        error!(user_id = %user.id, error = %e, "Failed to insert user");
        return Err(e.into());
    }

    info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))).into_response())
}

/// Replace name, gender and age of a user.
///
/// Succeeds even when no record has this id.
///
/// PUT /user/{id}
pub async fn update_user_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Response, UserError> {
    let (id, oid) = parse_id(path)?;
    let payload = parse_payload(&body)?;
    let changes = User::new(oid, payload.name, payload.gender, payload.age);

    let outcome = match state.store.update_one(&changes).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(user_id = %id, error = %e, "Failed to update user");
            return Err(e.into());
        }
    };

    debug!(
        user_id = %id,
        matched = outcome.matched,
        modified = outcome.modified,
        "User update applied"
    );

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: format!("Updated user {}", oid.to_hex()),
        }),
    )
        .into_response())
}

/// Delete a user. Deleting an id that does not exist still succeeds.
///
/// DELETE /user/{id}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, UserError> {
    let (id, oid) = parse_id(path)?;

    let deleted = match state.store.delete_one(oid).await {
        Ok(deleted) => deleted,
        Err(e) => {
            // Delete failures surface as 404, not 500
            error!(user_id = %id, error = %e, "Failed to delete user");
            return Err(UserError::NotFound(id));
        }
    };

    info!(user_id = %id, deleted = deleted, "User deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: format!("Deleted user {}", oid.to_hex()),
        }),
    )
        .into_response())
}
