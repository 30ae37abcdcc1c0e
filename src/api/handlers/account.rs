/*
 * Responsibility
 * - 認証済みユーザー向けの handler (/api/me, /api/wallet, /api/action)
 * - Identity は session middleware が付与済み。ここでは再検証しない
 */
use axum::{
    Json,
    body::Bytes,
    http::{HeaderMap, header},
};

use crate::{
    api::{
        dto::account::{ActionRequest, ActionResponse, MeResponse, WalletResponse},
        extractors::Authenticated,
    },
    error::AppError,
};

pub async fn me(Authenticated(identity): Authenticated) -> Json<MeResponse> {
    Json(MeResponse {
        success: true,
        user: identity,
    })
}

pub async fn wallet(Authenticated(identity): Authenticated) -> Json<WalletResponse> {
    Json(WalletResponse {
        success: true,
        user_id: identity.user_id,
        message: "Implement your wallet logic here",
    })
}

pub async fn action(
    Authenticated(identity): Authenticated,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ActionResponse>, AppError> {
    let req = parse_action(&headers, &body)?;

    tracing::info!(user_id = %identity.user_id, action = ?req.action, "protected action");

    Ok(Json(ActionResponse {
        success: true,
        user_id: identity.user_id,
        action: req.action,
        message: "Action performed successfully",
    }))
}

// Non-JSON or empty bodies are ignored, not rejected. A body declared as JSON
// that does not parse is a 400.
fn parse_action(headers: &HeaderMap, body: &Bytes) -> Result<ActionRequest, AppError> {
    if body.is_empty() || !is_json(headers) {
        return Ok(ActionRequest::default());
    }

    let Json(value) = Json::<serde_json::Value>::from_bytes(body)?;
    Ok(ActionRequest::from_body(value))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
