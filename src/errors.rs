use actix_web::{
    http::{header::LOCATION, StatusCode},
    HttpResponse, ResponseError,
};
use serde::Serialize;
use thiserror::Error;

/// Where the access gate sends anonymous requests.
pub const LOGIN_PATH: &str = "/auth/login";
/// Where the access gate sends requests that lack the admin flag.
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("An account with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Please log in to continue")]
    Unauthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Quiz {0} is not active")]
    QuizInactive(i64),

    #[error("Invalid choice '{0}', expected one of A, B, C, D")]
    ChoiceInvalid(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Unauthenticated => "UNAUTHENTICATED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::QuizInactive(_) => "QUIZ_INACTIVE",
            AppError::ChoiceInvalid(_) => "CHOICE_INVALID",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Gate failures short-circuit to a safe page instead of a bare status.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AppError::Unauthenticated => Some(LOGIN_PATH),
            AppError::Forbidden(_) => Some(HOME_PATH),
            _ => None,
        }
    }

    fn notice(&self) -> String {
        match self {
            // raw storage and internal messages stay in the logs
            AppError::DatabaseError(_) => "A storage error occurred, please try again".to_string(),
            AppError::InternalError(_) => "Something went wrong, please try again".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::DuplicateEmail(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Unauthenticated => StatusCode::SEE_OTHER,
            AppError::Forbidden(_) => StatusCode::SEE_OTHER,
            AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::QuizInactive(_) => StatusCode::CONFLICT,
            AppError::ChoiceInvalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.notice(),
            code: self.error_code(),
            status: status.as_u16(),
        };

        let mut builder = HttpResponse::build(status);
        if let Some(target) = self.redirect_target() {
            builder.insert_header((LOCATION, target));
        }
        builder.json(body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::AlreadyExists(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound("Referenced record does not exist".to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
                AppError::Validation(db_err.message().to_string())
            }
            _ => {
                log::error!("Database failure: {}", err);
                AppError::DatabaseError(err.to_string())
            }
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::DatabaseError(format!("Migration failed: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
