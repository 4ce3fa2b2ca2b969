use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct Quiz {
    pub id: i64,
    pub chapter_id: i64,
    pub quiz_date: DateTime<Utc>,
    pub duration_minutes: i64,
    pub remarks: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewQuiz {
    pub chapter_id: i64,
    pub quiz_date: DateTime<Utc>,
    pub duration_minutes: i64,
    pub remarks: Option<String>,
    pub is_active: bool,
}
