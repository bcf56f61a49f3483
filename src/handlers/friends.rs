use anyhow::anyhow;
use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::{extract::State, response::IntoResponse, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    error::{AppError, AppResult, ErrorId},
};

#[derive(serde::Deserialize, Validate)]
pub struct FriendRequestData {
    #[validate(length(min = 1, message = "requestee cannot be empty"))]
    pub requestee: Option<String>,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// POST /friend-request
///
/// The body is taken raw rather than through the Json extractor so that
/// malformed input maps to the contract's missing-parameter error instead
/// of the framework's default rejection.
pub async fn send_friend_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload: FriendRequestData = serde_json::from_slice(&body).map_err(|e| {
        AppError::BadRequest(
            anyhow!("Invalid JSON body: {}", e),
            ErrorId::MissingParameter,
        )
    })?;

    payload.validate().map_err(|e| {
        AppError::BadRequest(
            anyhow!("Invalid friend request data: {}", e),
            ErrorId::MissingParameter,
        )
    })?;

    let requestee_raw = match payload.requestee {
        Some(value) => value.trim().to_string(),
        None => {
            return Err(AppError::BadRequest(
                anyhow!("Missing required parameter: requestee"),
                ErrorId::MissingParameter,
            ));
        }
    };

    // Resolve the caller before touching anything with elevated privilege.
    let token = bearer_token(&headers).ok_or_else(|| {
        AppError::Forbidden(
            anyhow!("Authorized user not found"),
            ErrorId::AuthorizedUserNotFound,
        )
    })?;
    let requester_id = match state.identity.resolve_token(token).await? {
        Some(id) => id,
        None => {
            return Err(AppError::Forbidden(
                anyhow!("Authorized user not found"),
                ErrorId::AuthorizedUserNotFound,
            ));
        }
    };

    // A value that does not even parse as a profile id can never be
    // present in the profiles table.
    let requestee_id = match Uuid::parse_str(&requestee_raw) {
        Ok(id) => id,
        Err(_) => {
            return Err(AppError::NotFound(
                anyhow!("Requestee not found"),
                ErrorId::RequesteeNotFound,
            ));
        }
    };
    let requestee_profile = match state.friends.find_profile(requestee_id).await? {
        Some(profile) => profile,
        None => {
            return Err(AppError::NotFound(
                anyhow!("Requestee not found"),
                ErrorId::RequesteeNotFound,
            ));
        }
    };

    // No link may already connect the two ids in either direction.
    if state
        .friends
        .friendship_exists(requester_id, requestee_profile.id)
        .await?
    {
        return Err(AppError::BadRequest(
            anyhow!("A matching friend connection already exists"),
            ErrorId::FriendExists,
        ));
    }

    let link = state
        .friends
        .create_friend_request(requester_id, requestee_profile.id)
        .await?;

    Ok((StatusCode::OK, Json(link)))
}
