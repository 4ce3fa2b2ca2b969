use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    auth::{guard::CurrentUser, jwt::JwtService},
    errors::{AppError, AppResult},
    models::domain::{session::hash_token, Session, User},
    repositories::{SessionRepository, UserRepository},
};

pub const SESSION_COOKIE: &str = "quiz_session";

#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Binds logins to server-side session rows and resolves tokens back to users.
pub struct SessionManager {
    sessions: Arc<dyn SessionRepository>,
    users: Arc<dyn UserRepository>,
    jwt: JwtService,
}

impl SessionManager {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        users: Arc<dyn UserRepository>,
        jwt: JwtService,
    ) -> Self {
        Self {
            sessions,
            users,
            jwt,
        }
    }

    pub async fn login(&self, user: &User) -> AppResult<IssuedSession> {
        let session_id = Uuid::new_v4().to_string();
        let (token, claims) = self.jwt.create_token(user, &session_id)?;
        let expires_at = claims.expires_at();

        self.sessions
            .create(Session::new(
                session_id,
                user.id,
                hash_token(&token),
                expires_at,
            ))
            .await?;

        log::info!("User {} logged in", user.id);

        Ok(IssuedSession { token, expires_at })
    }

    /// Drops the session behind `token`. Unknown or invalid tokens are ignored.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        let Ok(claims) = self.jwt.validate_token(token) else {
            return Ok(());
        };

        if self.sessions.delete(&claims.sid).await? {
            log::info!("User {} logged out", claims.sub);
        }

        Ok(())
    }

    pub async fn resolve(&self, token: &str) -> AppResult<CurrentUser> {
        let claims = self.jwt.validate_token(token)?;
        let user_id = claims.user_id().ok_or(AppError::Unauthenticated)?;

        let session = self
            .sessions
            .find_by_id(&claims.sid)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        if !session.is_valid()
            || session.user_id != user_id
            || session.token_hash != hash_token(token)
        {
            return Err(AppError::Unauthenticated);
        }

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        Ok(CurrentUser::from(user))
    }

    pub async fn purge_expired(&self) -> AppResult<u64> {
        self.sessions.delete_expired().await
    }
}
