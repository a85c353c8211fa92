use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier, starting at 1 and never reused
    pub id: i64,
    /// Display name, trimmed
    pub name: String,
    /// Email address, trimmed and lower-cased
    pub email: String,
    /// Creation timestamp, set once by the store
    pub created_at: DateTime<Utc>,
    /// Time of the last successful update, absent until the first one
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Unsaved candidate; the store assigns `id` and `created_at` on insert.
    pub fn new(name: String, email: String, now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            name,
            email,
            created_at: now,
            updated_at: None,
        }
    }

    /// Overwrites the mutable fields and stamps the change.
    pub fn apply_update(&mut self, name: String, email: String, now: DateTime<Utc>) {
        self.name = name;
        self.email = email;
        self.updated_at = Some(now);
    }
}

/// DTO for creating a new user
///
/// Emptiness and email format are checked by the service; only size caps
/// are enforced at the HTTP boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 255))]
    pub email: String,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// DTO for replacing a user's name and email
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 255))]
    pub email: String,
}

impl UpdateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
