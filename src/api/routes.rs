/*
 * Responsibility
 * - URL 構造を定義
 * - /health は認証なし、/api/ 配下は session middleware を route_layer で適用
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    account::{action, me, wallet},
    health::health,
};
use crate::middleware::auth::session;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route("/wallet", get(wallet))
        .route("/action", post(action));

    Router::new()
        .route("/health", get(health))
        .nest("/api", session::apply(protected, state))
}
