use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuiz, Quiz},
};

const QUIZ_COLUMNS: &str =
    "id, chapter_id, quiz_date, duration_minutes, remarks, is_active, created_at";

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: NewQuiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    async fn find_by_chapter(&self, chapter_id: i64) -> AppResult<Vec<Quiz>>;
    async fn update(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqlxQuizRepository {
    pool: SqlitePool,
}

impl SqlxQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl QuizRepository for SqlxQuizRepository {
    async fn create(&self, quiz: NewQuiz) -> AppResult<Quiz> {
        let query = format!(
            "INSERT INTO quizzes (chapter_id, quiz_date, duration_minutes, remarks, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {QUIZ_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Quiz>(&query)
            .bind(quiz.chapter_id)
            .bind(quiz.quiz_date)
            .bind(quiz.duration_minutes)
            .bind(&quiz.remarks)
            .bind(quiz.is_active)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let query = format!("SELECT {QUIZ_COLUMNS} FROM quizzes WHERE id = ?");
        let quiz = sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(quiz)
    }

    async fn find_by_chapter(&self, chapter_id: i64) -> AppResult<Vec<Quiz>> {
        let query = format!("SELECT {QUIZ_COLUMNS} FROM quizzes WHERE chapter_id = ? ORDER BY id");
        let quizzes = sqlx::query_as::<_, Quiz>(&query)
            .bind(chapter_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(quizzes)
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let query = format!(
            "UPDATE quizzes SET quiz_date = ?, duration_minutes = ?, remarks = ?, is_active = ?
             WHERE id = ?
             RETURNING {QUIZ_COLUMNS}"
        );

        sqlx::query_as::<_, Quiz>(&query)
            .bind(quiz.quiz_date)
            .bind(quiz.duration_minutes)
            .bind(&quiz.remarks)
            .bind(quiz.is_active)
            .bind(quiz.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz.id)))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }

        Ok(())
    }
}
