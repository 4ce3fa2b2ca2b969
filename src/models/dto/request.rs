use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::user::normalize_email;

fn trim_in_place(value: &mut String) {
    *value = value.trim().to_string();
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8 to 128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 255))]
    pub full_name: String,

    #[validate(length(max = 255))]
    pub qualification: Option<String>,

    pub dob: Option<NaiveDate>,
}

impl RegisterRequest {
    /// Trims and lower-cases the email and trims the names. Runs before
    /// validation so blank or padded input is judged by what gets stored.
    pub fn normalized(mut self) -> Self {
        self.email = normalize_email(&self.email);
        trim_in_place(&mut self.full_name);
        self.qualification = trim_optional(self.qualification).filter(|q| !q.is_empty());
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255))]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateSubjectRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,
}

impl CreateSubjectRequest {
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.name);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateSubjectRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,
}

impl UpdateSubjectRequest {
    pub fn normalized(mut self) -> Self {
        self.name = trim_optional(self.name);
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateChapterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,
}

impl CreateChapterRequest {
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.name);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateChapterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,
}

impl UpdateChapterRequest {
    pub fn normalized(mut self) -> Self {
        self.name = trim_optional(self.name);
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuizRequest {
    pub quiz_date: DateTime<Utc>,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: i64,

    pub remarks: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateQuizRequest {
    pub quiz_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: Option<i64>,

    pub remarks: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct QuestionOptions {
    #[validate(length(max = 255))]
    pub option_a_text: Option<String>,
    #[validate(length(max = 255))]
    pub option_a_image_path: Option<String>,
    #[validate(length(max = 255))]
    pub option_b_text: Option<String>,
    #[validate(length(max = 255))]
    pub option_b_image_path: Option<String>,
    #[validate(length(max = 255))]
    pub option_c_text: Option<String>,
    #[validate(length(max = 255))]
    pub option_c_image_path: Option<String>,
    #[validate(length(max = 255))]
    pub option_d_text: Option<String>,
    #[validate(length(max = 255))]
    pub option_d_image_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 5000))]
    pub question_text: String,

    #[validate(length(max = 255))]
    pub question_image_path: Option<String>,

    #[serde(flatten)]
    #[validate(nested)]
    pub options: QuestionOptions,

    /// Parsed into a `Choice` by the service so a bad letter reports `ChoiceInvalid`.
    pub correct_answer: String,

    #[validate(range(min = 1, message = "Points must be positive"))]
    pub points: i64,
}

impl CreateQuestionRequest {
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.question_text);
        self
    }
}

/// Option fields left out keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, max = 5000))]
    pub question_text: Option<String>,

    #[validate(length(max = 255))]
    pub question_image_path: Option<String>,

    #[serde(flatten)]
    #[validate(nested)]
    pub options: QuestionOptions,

    pub correct_answer: Option<String>,

    #[validate(range(min = 1, message = "Points must be positive"))]
    pub points: Option<i64>,
}

impl UpdateQuestionRequest {
    pub fn normalized(mut self) -> Self {
        self.question_text = trim_optional(self.question_text);
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(range(min = 1))]
    pub question_id: i64,

    pub choice: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AttemptFilter {
    pub quiz_id: Option<i64>,
}
