//! Admin passcode endpoint and gate

use axum::{Json, Router, extract::State, http::HeaderMap, routing::post};
use serde::{Deserialize, Serialize};

use clubcal_core::Clubcal;

use crate::routes::AppError;
use crate::state::AppState;

/// Header mutating requests carry the passcode in
pub const ADMIN_CODE_HEADER: &str = "x-admin-code";

const INVALID_CODE_MESSAGE: &str = "Invalid code. Please try again.";

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/verify", post(verify))
}

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

/// Response from a successful verification
#[derive(Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// POST /admin/verify - Check the shared passcode
///
/// Frontends call this when the user enters admin mode.
async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    let clubcal = state.clubcal()?;

    if req.code != clubcal.admin_code() {
        return Err(AppError::unauthorized(INVALID_CODE_MESSAGE));
    }

    Ok(Json(VerifyResponse { valid: true }))
}

/// Require the admin passcode header on a mutating request.
pub fn require_admin(clubcal: &Clubcal, headers: &HeaderMap) -> Result<(), AppError> {
    let provided = headers
        .get(ADMIN_CODE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if provided != clubcal.admin_code() {
        return Err(AppError::unauthorized(INVALID_CODE_MESSAGE));
    }

    Ok(())
}
