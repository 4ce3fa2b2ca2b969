use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::User,
};

/// The user a request is acting as, resolved from its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        CurrentUser {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            is_admin: user.is_admin,
        }
    }
}

pub fn require_login(current: Option<&CurrentUser>) -> AppResult<CurrentUser> {
    current.cloned().ok_or(AppError::Unauthenticated)
}

pub fn require_admin(current: Option<&CurrentUser>) -> AppResult<CurrentUser> {
    let user = require_login(current)?;
    if !user.is_admin {
        return Err(AppError::Forbidden(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(user)
}

pub fn require_owner_or_admin(user: &CurrentUser, owner_id: i64) -> AppResult<()> {
    if !user.is_admin && user.id != owner_id {
        return Err(AppError::Forbidden(
            "You can only access your own attempts".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_current_user(id: i64, is_admin: bool) -> CurrentUser {
        CurrentUser {
            id,
            email: format!("user{}@example.com", id),
            full_name: "Test User".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_require_login_without_session() {
        assert!(matches!(require_login(None), Err(AppError::Unauthenticated)));
    }

    #[test]
    fn test_require_login_success() {
        let user = create_current_user(1, false);
        assert_eq!(require_login(Some(&user)).unwrap(), user);
    }

    #[test]
    fn test_require_admin_without_session() {
        assert!(matches!(require_admin(None), Err(AppError::Unauthenticated)));
    }

    #[test]
    fn test_require_admin_failure() {
        let user = create_current_user(1, false);
        assert!(matches!(
            require_admin(Some(&user)),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_require_admin_success() {
        let admin = create_current_user(1, true);
        assert!(require_admin(Some(&admin)).is_ok());
    }

    #[test]
    fn test_require_owner_or_admin() {
        let owner = create_current_user(5, false);
        let admin = create_current_user(1, true);
        let stranger = create_current_user(6, false);

        assert!(require_owner_or_admin(&owner, 5).is_ok());
        assert!(require_owner_or_admin(&admin, 5).is_ok());
        assert!(matches!(
            require_owner_or_admin(&stranger, 5),
            Err(AppError::Forbidden(_))
        ));
    }
}
