use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{hash_password, verify_password},
    errors::{AppError, AppResult},
    models::{
        domain::{user::normalize_email, NewUser, User},
        dto::request::{LoginRequest, RegisterRequest},
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let request = request.normalized();
        request.validate()?;

        let mut new_user = NewUser::learner(
            &request.email,
            hash_password(&request.password)?,
            &request.full_name,
        );
        new_user.qualification = request.qualification;
        new_user.dob = request.dob;

        let user = self.repository.create(new_user).await?;
        log::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Unknown emails and wrong passwords fail the same way.
    pub async fn authenticate(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;

        let user = self
            .repository
            .find_by_email(&normalize_email(&request.email))
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&request.password, &user.password_hash) {
            log::info!("Failed login attempt for user {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Makes sure an admin account exists for `email`. Creates one when the
    /// email is unknown and promotes an existing account otherwise; an existing
    /// password is never replaced.
    pub async fn provision_admin(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> AppResult<User> {
        let email = normalize_email(email);

        if let Some(existing) = self.repository.find_by_email(&email).await? {
            if existing.is_admin {
                return Ok(existing);
            }
            let promoted = self.repository.set_admin(existing.id, true).await?;
            log::info!("Promoted user {} to admin", promoted.id);
            return Ok(promoted);
        }

        if password.len() < 8 {
            return Err(AppError::Validation(
                "Admin password must be at least 8 characters".to_string(),
            ));
        }

        let admin = self
            .repository
            .create(NewUser::admin(&email, hash_password(password)?, full_name))
            .await?;
        log::info!("Provisioned admin user {} ({})", admin.id, admin.email);

        Ok(admin)
    }
}
