use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::services::session::{AuthFailure, Identity};

/// Handler で Identity を受け取るための extractor
/// session middleware が Identity を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 (ミドルウェア未設定のルート)
pub struct Authenticated(pub Identity);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthFailure;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| {
                let err = AuthFailure::UnexpectedFailure(format!(
                    "no identity attached to {}",
                    parts.uri.path()
                ));
                tracing::error!(kind = err.kind(), error = %err, "route is not behind the session gate");
                err
            })
    }
}
