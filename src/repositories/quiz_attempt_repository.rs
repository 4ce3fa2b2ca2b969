use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{score_answers, Choice, Question, QuizAttempt, UserAnswer},
};

const ATTEMPT_COLUMNS: &str = "id, user_id, quiz_id, start_time, end_time, score, is_completed";

#[async_trait]
pub trait QuizAttemptRepository: Send + Sync {
    /// Opens an attempt, or hands back the one already open for this user and
    /// quiz. The flag is true when a new row was created.
    async fn create_or_resume(
        &self,
        user_id: i64,
        quiz_id: i64,
        start_time: DateTime<Utc>,
    ) -> AppResult<(QuizAttempt, bool)>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizAttempt>>;
    async fn find_open(&self, user_id: i64, quiz_id: i64) -> AppResult<Option<QuizAttempt>>;
    async fn list_for_user(&self, user_id: i64, quiz_id: Option<i64>)
        -> AppResult<Vec<QuizAttempt>>;
    /// Insert-or-replace the answer for (attempt, question). Fails with
    /// `InvalidState` once the attempt is completed.
    async fn upsert_answer(
        &self,
        attempt_id: i64,
        question_id: i64,
        choice: Choice,
    ) -> AppResult<UserAnswer>;
    async fn find_answers(&self, attempt_id: i64) -> AppResult<Vec<UserAnswer>>;
    /// Closes the attempt and stores its score in one transaction.
    async fn complete(&self, attempt_id: i64, end_time: DateTime<Utc>) -> AppResult<QuizAttempt>;
}

pub struct SqlxQuizAttemptRepository {
    pool: SqlitePool,
}

impl SqlxQuizAttemptRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl QuizAttemptRepository for SqlxQuizAttemptRepository {
    async fn create_or_resume(
        &self,
        user_id: i64,
        quiz_id: i64,
        start_time: DateTime<Utc>,
    ) -> AppResult<(QuizAttempt, bool)> {
        if let Some(open) = self.find_open(user_id, quiz_id).await? {
            return Ok((open, false));
        }

        let query = format!(
            "INSERT INTO quiz_attempts (user_id, quiz_id, start_time, end_time, score, is_completed)
             VALUES (?, ?, ?, NULL, 0, 0)
             RETURNING {ATTEMPT_COLUMNS}"
        );

        let inserted = sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(user_id)
            .bind(quiz_id)
            .bind(start_time)
            .fetch_one(&self.pool)
            .await;

        match inserted {
            Ok(attempt) => Ok((attempt, true)),
            // lost a race against a concurrent start; the open-attempt index kept one row
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => self
                .find_open(user_id, quiz_id)
                .await?
                .map(|open| (open, false))
                .ok_or_else(|| {
                    AppError::InvalidState("Concurrent attempt could not be resumed".to_string())
                }),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<QuizAttempt>> {
        let query = format!("SELECT {ATTEMPT_COLUMNS} FROM quiz_attempts WHERE id = ?");
        let attempt = sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(attempt)
    }

    async fn find_open(&self, user_id: i64, quiz_id: i64) -> AppResult<Option<QuizAttempt>> {
        let query = format!(
            "SELECT {ATTEMPT_COLUMNS} FROM quiz_attempts
             WHERE user_id = ? AND quiz_id = ? AND is_completed = 0"
        );
        let attempt = sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(user_id)
            .bind(quiz_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(attempt)
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        quiz_id: Option<i64>,
    ) -> AppResult<Vec<QuizAttempt>> {
        let query = format!(
            "SELECT {ATTEMPT_COLUMNS} FROM quiz_attempts
             WHERE user_id = ? AND (? IS NULL OR quiz_id = ?)
             ORDER BY id DESC"
        );
        let attempts = sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(user_id)
            .bind(quiz_id)
            .bind(quiz_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(attempts)
    }

    async fn upsert_answer(
        &self,
        attempt_id: i64,
        question_id: i64,
        choice: Choice,
    ) -> AppResult<UserAnswer> {
        // The uniqueness constraint does the deduplication, and the EXISTS guard
        // keeps a completed attempt from taking new writes.
        let answer = sqlx::query_as::<_, UserAnswer>(
            "INSERT INTO user_answers (quiz_attempt_id, question_id, selected_answer)
             SELECT ?1, ?2, ?3
             WHERE EXISTS (SELECT 1 FROM quiz_attempts WHERE id = ?1 AND is_completed = 0)
             ON CONFLICT (quiz_attempt_id, question_id)
             DO UPDATE SET selected_answer = excluded.selected_answer
             RETURNING id, quiz_attempt_id, question_id, selected_answer",
        )
        .bind(attempt_id)
        .bind(question_id)
        .bind(choice.as_str())
        .fetch_optional(&self.pool)
        .await?;

        answer.ok_or_else(|| {
            AppError::InvalidState(format!("Attempt {} is already completed", attempt_id))
        })
    }

    async fn find_answers(&self, attempt_id: i64) -> AppResult<Vec<UserAnswer>> {
        let answers = sqlx::query_as::<_, UserAnswer>(
            "SELECT id, quiz_attempt_id, question_id, selected_answer
             FROM user_answers WHERE quiz_attempt_id = ? ORDER BY question_id",
        )
        .bind(attempt_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(answers)
    }

    async fn complete(&self, attempt_id: i64, end_time: DateTime<Utc>) -> AppResult<QuizAttempt> {
        let mut tx = self.pool.begin().await?;

        // Take the write lock first so a concurrent finish sees zero rows.
        let closed = sqlx::query(
            "UPDATE quiz_attempts SET is_completed = 1, end_time = ?
             WHERE id = ? AND is_completed = 0",
        )
        .bind(end_time)
        .bind(attempt_id)
        .execute(&mut *tx)
        .await?;

        if closed.rows_affected() == 0 {
            tx.rollback().await?;
            return match self.find_by_id(attempt_id).await? {
                Some(_) => Err(AppError::InvalidState(format!(
                    "Attempt {} is already completed",
                    attempt_id
                ))),
                None => Err(AppError::NotFound(format!(
                    "Attempt with id '{}' not found",
                    attempt_id
                ))),
            };
        }

        let questions = sqlx::query_as::<_, Question>(
            "SELECT q.id, q.quiz_id, q.question_text, q.question_image_path,
                    q.option_a_text, q.option_a_image_path, q.option_b_text, q.option_b_image_path,
                    q.option_c_text, q.option_c_image_path, q.option_d_text, q.option_d_image_path,
                    q.correct_answer, q.points
             FROM questions q
             JOIN quiz_attempts a ON a.quiz_id = q.quiz_id
             WHERE a.id = ?",
        )
        .bind(attempt_id)
        .fetch_all(&mut *tx)
        .await?;

        let answers = sqlx::query_as::<_, UserAnswer>(
            "SELECT id, quiz_attempt_id, question_id, selected_answer
             FROM user_answers WHERE quiz_attempt_id = ?",
        )
        .bind(attempt_id)
        .fetch_all(&mut *tx)
        .await?;

        let score = score_answers(&questions, &answers);

        let query = format!("UPDATE quiz_attempts SET score = ? WHERE id = ? RETURNING {ATTEMPT_COLUMNS}");
        let attempt = sqlx::query_as::<_, QuizAttempt>(&query)
            .bind(score)
            .bind(attempt_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(attempt)
    }
}
