use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub qualification: Option<String>,
    pub dob: Option<NaiveDate>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// A user that has not been stored yet. The password is already hashed.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub qualification: Option<String>,
    pub dob: Option<NaiveDate>,
    pub is_admin: bool,
}

impl NewUser {
    pub fn learner(email: &str, password_hash: String, full_name: &str) -> Self {
        NewUser {
            email: normalize_email(email),
            password_hash,
            full_name: full_name.trim().to_string(),
            qualification: None,
            dob: None,
            is_admin: false,
        }
    }

    pub fn admin(email: &str, password_hash: String, full_name: &str) -> Self {
        NewUser {
            is_admin: true,
            ..NewUser::learner(email, password_hash, full_name)
        }
    }
}

/// Emails are compared case-insensitively; they are stored lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
impl User {
    pub fn test_user(id: i64, email: &str, is_admin: bool) -> Self {
        User {
            id,
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            full_name: "Test User".to_string(),
            qualification: None,
            dob: None,
            is_admin,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email() {
        let user = NewUser::learner("  Jane@Example.COM ", "hash".to_string(), " Jane Doe ");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.full_name, "Jane Doe");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_new_admin_sets_flag() {
        let admin = NewUser::admin("root@example.com", "hash".to_string(), "Root");
        assert!(admin.is_admin);
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User::test_user(1, "john@example.com", false);
        let json = serde_json::to_string(&user).expect("user should serialize");
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
    }
}
