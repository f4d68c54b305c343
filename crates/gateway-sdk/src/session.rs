use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/sdk/session`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionCreatePayload {
    pub user_external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_info: Option<DeviceInfo>,
}

impl SessionCreatePayload {
    pub fn new(user_external_id: impl Into<String>) -> Self {
        Self {
            user_external_id: user_external_id.into(),
            ..Default::default()
        }
    }
}

/// Profile data the gateway stores on the end user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Web,
    Mobile,
    Desktop,
}

/// Tokens returned by session creation and refresh.
///
/// Refresh responses only carry the token fields; the rest default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_context_source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socket_urls: Vec<String>,
}

/// The end user a session was issued for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: String,
    pub external_id: String,
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_environment: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_omits_unset_fields() {
        let json = serde_json::to_value(SessionCreatePayload::new("user-42")).unwrap();
        assert_eq!(json, serde_json::json!({"user_external_id": "user-42"}));
    }

    #[test]
    fn device_type_is_lowercase() {
        let info = DeviceInfo {
            device_type: Some(DeviceType::Mobile),
            ..Default::default()
        };
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["device_type"], "mobile");
    }

    #[test]
    fn bundle_from_refresh_shape() {
        let bundle: SessionTokenBundle = serde_json::from_value(serde_json::json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 900
        }))
        .unwrap();
        assert_eq!(bundle.token_type, "Bearer");
        assert!(bundle.user.is_none());
        assert!(bundle.socket_urls.is_empty());
    }

    #[test]
    fn bundle_from_session_shape() {
        let bundle: SessionTokenBundle = serde_json::from_value(serde_json::json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 900,
            "token_type": "Bearer",
            "user": {
                "user_id": "u-1",
                "external_id": "user-42",
                "tenant_id": "t-1",
                "project_id": "project-1"
            },
            "project_context_source": "header",
            "socket_urls": ["ws://localhost:3001"]
        }))
        .unwrap();
        let user = bundle.user.unwrap();
        assert_eq!(user.external_id, "user-42");
        assert_eq!(user.project_id.as_deref(), Some("project-1"));
        assert_eq!(bundle.project_context_source.as_deref(), Some("header"));
        assert_eq!(bundle.socket_urls, vec!["ws://localhost:3001"]);
    }
}
