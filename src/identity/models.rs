//! Identity provider data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
    Moderator,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::Moderator => "moderator",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            "moderator" => Some(UserRole::Moderator),
            _ => None,
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// Opaque token returned by the provider on successful sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken(pub String);

/// Credential handed back by the identity provider.
///
/// `verified` is false while the provider still expects email
/// verification; that is a valid non-terminal state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub identity_id: String,
    pub token: AuthToken,
    pub verified: bool,
}

/// Full profile record as stored by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub verified: bool,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating the profile record right after sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub username: String,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.avatar_url.is_none()
            && self.bio.is_none()
            && self.location.is_none()
            && self.website.is_none()
    }
}

/// Extra fields attached to a sign-up call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpMetadata {
    pub name: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> Profile {
        Profile {
            id: "id-1".to_string(),
            email: "ayse@example.com".to_string(),
            name: "Ayşe K.".to_string(),
            username: "ayse".to_string(),
            avatar_url: None,
            bio: None,
            location: None,
            website: None,
            verified: true,
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn role_as_str() {
        assert_eq!(UserRole::User.as_str(), "user");
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::Moderator.as_str(), "moderator");
    }

    #[test]
    fn role_from_str_valid() {
        assert_eq!(UserRole::from_str("user"), Some(UserRole::User));
        assert_eq!(UserRole::from_str("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("moderator"), Some(UserRole::Moderator));
    }

    #[test]
    fn role_from_str_case_insensitive() {
        assert_eq!(UserRole::from_str("Admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("MODERATOR"), Some(UserRole::Moderator));
    }

    #[test]
    fn role_from_str_invalid() {
        assert_eq!(UserRole::from_str(""), None);
        assert_eq!(UserRole::from_str("superadmin"), None);
        assert_eq!(UserRole::from_str("guest"), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"moderator\"").unwrap();
        assert_eq!(role, UserRole::Moderator);
    }

    #[test]
    fn only_admin_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
        assert!(!UserRole::Moderator.is_admin());
    }

    #[test]
    fn profile_snapshot_roundtrip() {
        let profile = test_profile();
        let serialized = serde_json::to_string(&profile).unwrap();
        let deserialized: Profile = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, profile);
    }

    #[test]
    fn profile_update_is_empty() {
        assert!(ProfileUpdate::default().is_empty());
        let update = ProfileUpdate {
            bio: Some("bio".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
