use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// Storage key under which the serialized session blob is kept.
pub const SESSION_STORAGE_KEY: &str = "user_session";

const AVATAR_PLACEHOLDER_BASE: &str = "https://ui-avatars.com/api/";

/// Role flag carried by the session.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// May manage the video catalogue.
    Admin,
    /// Regular learner.
    #[default]
    User,
}

impl UserRole {
    /// Return the wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err("unknown user role"),
        }
    }
}

// Anything the server sends that is not `admin` must not unlock admin UI.
impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain-text password; only ever sent over the wire.
    pub password: String,
}

/// The client-held record identifying the logged-in user.
///
/// This is the login response payload as returned by the server. Fields the
/// client does not model are kept in [`Session::extra`] so that the stored
/// blob matches what the server sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Account email, also the key for progress records.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role flag gating admin-only UI.
    #[serde(default)]
    pub role: UserRole,
    /// Opaque bearer token issued at login.
    #[serde(default)]
    pub token: String,
    /// Avatar image URL, when the server provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Any additional fields from the login response.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// Whether this session may see admin-only UI.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Name shown in the header; falls back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Avatar URL, or a generated initials image when none was provided.
    #[must_use]
    pub fn avatar_url(&self) -> String {
        if let Some(avatar) = self.avatar.as_deref().filter(|value| !value.is_empty()) {
            return avatar.to_string();
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("name", self.display_name())
            .append_pair("background", "random")
            .finish();
        format!("{AVATAR_PLACEHOLDER_BASE}?{query}")
    }

    /// Serialize into the single blob written to client storage.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_storage_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored blob. A corrupt blob is reported as an error so callers
    /// can treat it as "no session".
    ///
    /// # Errors
    /// Returns an error if the blob is not a valid session.
    pub fn from_storage_str(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn admin_payload() -> Value {
        json!({
            "email": "admin@test.com",
            "role": "admin",
            "token": "mock-admin-token",
            "name": "Admin User"
        })
    }

    #[test]
    fn parses_login_response() {
        let session: Session = serde_json::from_value(admin_payload()).unwrap();
        assert_eq!(session.email, "admin@test.com");
        assert_eq!(session.name, "Admin User");
        assert_eq!(session.token, "mock-admin-token");
        assert!(session.is_admin());
        assert!(session.avatar.is_none());
        assert!(session.extra.is_empty());
    }

    #[test]
    fn unknown_role_is_not_admin() {
        let session: Session = serde_json::from_value(json!({
            "email": "guest@test.com",
            "role": "superuser",
            "token": "t",
            "name": "Guest"
        }))
        .unwrap();
        assert_eq!(session.role, UserRole::User);
        assert!(!session.is_admin());
    }

    #[test]
    fn storage_round_trip_keeps_unknown_fields() {
        let mut payload = admin_payload();
        payload["department"] = json!("HR");
        let session: Session = serde_json::from_value(payload).unwrap();

        let blob = session.to_storage_string().unwrap();
        let restored = Session::from_storage_str(&blob).unwrap();

        assert_eq!(restored, session);
        assert_eq!(restored.extra.get("department"), Some(&json!("HR")));
        let raw: Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(raw["department"], "HR");
        assert_eq!(raw["role"], "admin");
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        assert!(Session::from_storage_str("{not json").is_err());
        assert!(Session::from_storage_str("{\"name\":\"no email\"}").is_err());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let session: Session = serde_json::from_value(json!({
            "email": "demo@test.com",
            "role": "user",
            "token": "mock-user-token",
            "name": "  "
        }))
        .unwrap();
        assert_eq!(session.display_name(), "demo@test.com");
    }

    #[test]
    fn avatar_url_prefers_server_value() {
        let mut session: Session = serde_json::from_value(admin_payload()).unwrap();
        let generated = session.avatar_url();
        assert!(generated.starts_with(AVATAR_PLACEHOLDER_BASE));
        assert!(generated.contains("name=Admin+User"));

        session.avatar = Some("https://cdn.example.com/a.png".to_string());
        assert_eq!(session.avatar_url(), "https://cdn.example.com/a.png");
    }

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [("admin", UserRole::Admin), ("user", UserRole::User)] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
        assert!(UserRole::from_str("guest").is_err());
    }
}
