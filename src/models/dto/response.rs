use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::domain::{AttemptState, Question, QuizAttempt, User, UserAnswer};

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub qualification: Option<String>,
    pub dob: Option<NaiveDate>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            qualification: user.qualification,
            dob: user.dob,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}

/// What a learner sees of a question: everything except the answer key.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: i64,
    pub quiz_id: i64,
    pub question_text: String,
    pub question_image_path: Option<String>,
    pub option_a_text: Option<String>,
    pub option_a_image_path: Option<String>,
    pub option_b_text: Option<String>,
    pub option_b_image_path: Option<String>,
    pub option_c_text: Option<String>,
    pub option_c_image_path: Option<String>,
    pub option_d_text: Option<String>,
    pub option_d_image_path: Option<String>,
    pub points: i64,
}

impl From<Question> for QuestionView {
    fn from(question: Question) -> Self {
        QuestionView {
            id: question.id,
            quiz_id: question.quiz_id,
            question_text: question.question_text,
            question_image_path: question.question_image_path,
            option_a_text: question.option_a_text,
            option_a_image_path: question.option_a_image_path,
            option_b_text: question.option_b_text,
            option_b_image_path: question.option_b_image_path,
            option_c_text: question.option_c_text,
            option_c_image_path: question.option_c_image_path,
            option_d_text: question.option_d_text,
            option_d_image_path: question.option_d_image_path,
            points: question.points,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AttemptDto {
    #[serde(flatten)]
    pub attempt: QuizAttempt,
    pub state: AttemptState,
}

impl From<QuizAttempt> for AttemptDto {
    fn from(attempt: QuizAttempt) -> Self {
        let state = attempt.state();
        AttemptDto { attempt, state }
    }
}

#[derive(Debug, Serialize)]
pub struct AttemptDetailDto {
    #[serde(flatten)]
    pub attempt: AttemptDto,
    pub answers: Vec<UserAnswer>,
}
