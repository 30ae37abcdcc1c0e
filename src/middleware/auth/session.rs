//! Session token (bearer) 検証 → Identity を extensions に入れる
//!
//! 失敗時はここで 401 を返し、handler には到達させない。
//! 検証ロジック自体は `services::session::SessionGate` 側。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::services::session::AuthFailure;
use crate::state::AppState;

/// 認証を掛けたい Router に middleware を適用する。
///
/// `route_layer` なので、マッチしなかった path は 401 ではなく 404 になる。
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, session_middleware))
}

async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthFailure> {
    // Owned copy: the request must not stay borrowed across the verifier await.
    let authorization = req.headers().get(header::AUTHORIZATION).cloned();

    let identity = match state.session_gate.authenticate(authorization.as_ref()).await {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                error = %err,
                source = ?std::error::Error::source(&err),
                method = %req.method(),
                path = %req.uri().path(),
                "session authentication failed"
            );
            return Err(err);
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
