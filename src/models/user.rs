use super::null_as_empty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub banned: bool,
    pub last_active: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Custom fields and anything else the server returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Name if set, otherwise the ID.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryUsersResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_keeps_custom_fields() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "alice",
                "name": "Alice",
                "role": "admin",
                "online": true,
                "last_active": "2024-03-01T10:00:00.123456Z",
                "favourite_color": "green"
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, "alice");
        assert_eq!(user.role.as_deref(), Some("admin"));
        assert!(user.online);
        assert!(!user.banned);
        assert!(user.last_active.is_some());
        assert_eq!(user.extra["favourite_color"], "green");
    }

    #[test]
    fn test_null_users_decode_as_empty() {
        let response: QueryUsersResponse = serde_json::from_str(r#"{"users": null}"#).unwrap();
        assert!(response.users.is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let user: User = serde_json::from_str(r#"{"id": "bob", "name": ""}"#).unwrap();
        assert_eq!(user.display_name(), "bob");
    }
}
