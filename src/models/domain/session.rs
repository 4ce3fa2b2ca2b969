use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Server-side half of a login. The cookie only carries a signed reference to it.
#[derive(Clone, Debug, Deserialize, Serialize, FromRow)]
pub struct Session {
    pub id: String,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: String, user_id: i64, token_hash: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            token_hash,
            created_at: Utc::now(),
            expires_at,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

pub fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    #[test]
    fn test_session_creation() {
        let expires_at = Utc::now() + Duration::hours(8);
        let session = Session::new(Uuid::new_v4().to_string(), 42, "hash123".to_string(), expires_at);

        assert_eq!(session.user_id, 42);
        assert_eq!(session.token_hash, "hash123");
        assert!(session.is_valid());
    }

    #[test]
    fn test_session_expired() {
        let expires_at = Utc::now() - Duration::minutes(1);
        let session = Session::new(Uuid::new_v4().to_string(), 42, "hash123".to_string(), expires_at);

        assert!(!session.is_valid());
    }

    #[test]
    fn test_hash_token_consistency() {
        let hash1 = hash_token("my-session-token");
        let hash2 = hash_token("my-session-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert_ne!(hash1, hash_token("other-token"));
    }
}
