use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BoxError;

/// The two mutually exclusive account roles. Business profiles may create
/// offers; customer profiles place orders and write reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Business,
    Customer,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Business => "business",
            ProfileType::Customer => "customer",
        }
    }
}

impl std::str::FromStr for ProfileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business" => Ok(ProfileType::Business),
            "customer" => Ok(ProfileType::Customer),
            other => Err(format!("unknown profile type: {other}")),
        }
    }
}

impl std::fmt::Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account joined with its profile, the shape every read path wants.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRecord {
    pub user_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub tel: String,
    pub location: String,
    pub description: String,
    pub file: Option<String>,
    pub working_hours: String,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub is_staff: bool,
}

impl ProfileRecord {
    pub fn is_business(&self) -> bool {
        self.profile_type == ProfileType::Business
    }

    pub fn is_customer(&self) -> bool {
        self.profile_type == ProfileType::Customer
    }
}

/// Credentials row used by login.
#[derive(Debug, Clone)]
pub struct AuthRecord {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
}

/// Registration payload, already validated and with the password hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_type: ProfileType,
}

/// Partial profile update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
    pub tel: Option<String>,
    pub file: Option<String>,
}

/// Repository trait for user accounts and their profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts the user row and its profile row as one unit.
    async fn create_user(&self, user: &NewUser) -> Result<ProfileRecord, BoxError>;

    async fn find_auth_by_username(&self, username: &str) -> Result<Option<AuthRecord>, BoxError>;

    async fn username_or_email_exists(&self, username: &str, email: &str) -> Result<bool, BoxError>;

    async fn get(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, BoxError>;

    /// Applies an allow-listed partial update; refreshes `uploaded_at` when
    /// the stored file locator changes. Returns the updated record, or
    /// `None` for an unknown user.
    async fn update(&self, user_id: Uuid, update: &ProfileUpdate) -> Result<Option<ProfileRecord>, BoxError>;

    async fn list_by_type(&self, profile_type: ProfileType) -> Result<Vec<ProfileRecord>, BoxError>;

    async fn user_exists(&self, user_id: Uuid) -> Result<bool, BoxError>;

    async fn count_by_type(&self, profile_type: ProfileType) -> Result<i64, BoxError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_type_round_trip() {
        assert_eq!("business".parse::<ProfileType>().unwrap(), ProfileType::Business);
        assert_eq!("customer".parse::<ProfileType>().unwrap(), ProfileType::Customer);
        assert!("admin".parse::<ProfileType>().is_err());
        assert_eq!(ProfileType::Business.to_string(), "business");
    }
}
