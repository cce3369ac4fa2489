use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let auth_token = state
        .auth_service
        .authenticate(body.email.trim(), &body.password)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Authentication rejected");
            ApiError::from(e)
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            token: auth_token.token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
}
