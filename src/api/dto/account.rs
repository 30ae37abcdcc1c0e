/*
 * Responsibility
 * - /api/me, /api/wallet, /api/action の request/response DTO
 * - 認証済み主体は Identity (camelCase) をそのまま返す
 */
use serde::Serialize;

use crate::services::session::Identity;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: Identity,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse {
    pub success: bool,
    pub user_id: String,
    pub message: &'static str,
}

/// Body of `POST /api/action`.
///
/// `action` is passed through untouched:
/// - None: key absent (or no JSON body at all)
/// - Some(Value::Null): explicit `null`
#[derive(Debug, Default, PartialEq)]
pub struct ActionRequest {
    pub action: Option<serde_json::Value>,
}

impl ActionRequest {
    /// Only a top-level object can carry `action`; anything else reads as absent.
    pub fn from_body(body: serde_json::Value) -> Self {
        Self {
            action: body.as_object().and_then(|o| o.get("action")).cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<serde_json::Value>,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn explicit_null_is_kept_apart_from_absent() {
        assert_eq!(
            ActionRequest::from_body(json!({ "action": null })).action,
            Some(serde_json::Value::Null)
        );
        assert_eq!(ActionRequest::from_body(json!({})).action, None);
    }

    #[test]
    fn non_object_body_has_no_action() {
        assert_eq!(ActionRequest::from_body(json!(["action"])), ActionRequest::default());
        assert_eq!(ActionRequest::from_body(json!("action")), ActionRequest::default());
    }

    #[test]
    fn response_echoes_null_but_omits_absent() {
        let with_null = ActionResponse {
            success: true,
            user_id: "u1".into(),
            action: Some(serde_json::Value::Null),
            message: "ok",
        };
        assert_eq!(serde_json::to_value(&with_null).unwrap()["action"], json!(null));
        assert!(
            serde_json::to_value(&with_null)
                .unwrap()
                .as_object()
                .unwrap()
                .contains_key("action")
        );

        let absent = ActionResponse {
            action: None,
            ..with_null
        };
        assert!(
            !serde_json::to_value(&absent)
                .unwrap()
                .as_object()
                .unwrap()
                .contains_key("action")
        );
    }
}
