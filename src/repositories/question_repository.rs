use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuestion, Question},
};

const QUESTION_COLUMNS: &str = "id, quiz_id, question_text, question_image_path, \
     option_a_text, option_a_image_path, option_b_text, option_b_image_path, \
     option_c_text, option_c_image_path, option_d_text, option_d_image_path, \
     correct_answer, points";

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: NewQuestion) -> AppResult<Question>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>>;
    async fn find_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>>;
    async fn update(&self, question: Question) -> AppResult<Question>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqlxQuestionRepository {
    pool: SqlitePool,
}

impl SqlxQuestionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl QuestionRepository for SqlxQuestionRepository {
    async fn create(&self, question: NewQuestion) -> AppResult<Question> {
        let query = format!(
            "INSERT INTO questions (quiz_id, question_text, question_image_path,
                 option_a_text, option_a_image_path, option_b_text, option_b_image_path,
                 option_c_text, option_c_image_path, option_d_text, option_d_image_path,
                 correct_answer, points)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {QUESTION_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Question>(&query)
            .bind(question.quiz_id)
            .bind(&question.question_text)
            .bind(&question.question_image_path)
            .bind(&question.option_a_text)
            .bind(&question.option_a_image_path)
            .bind(&question.option_b_text)
            .bind(&question.option_b_image_path)
            .bind(&question.option_c_text)
            .bind(&question.option_c_image_path)
            .bind(&question.option_d_text)
            .bind(&question.option_d_image_path)
            .bind(question.correct_answer.as_str())
            .bind(question.points)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let query = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?");
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }

    async fn find_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        let query = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE quiz_id = ? ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(quiz_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let query = format!(
            "UPDATE questions SET question_text = ?, question_image_path = ?,
                 option_a_text = ?, option_a_image_path = ?, option_b_text = ?, option_b_image_path = ?,
                 option_c_text = ?, option_c_image_path = ?, option_d_text = ?, option_d_image_path = ?,
                 correct_answer = ?, points = ?
             WHERE id = ?
             RETURNING {QUESTION_COLUMNS}"
        );

        sqlx::query_as::<_, Question>(&query)
            .bind(&question.question_text)
            .bind(&question.question_image_path)
            .bind(&question.option_a_text)
            .bind(&question.option_a_image_path)
            .bind(&question.option_b_text)
            .bind(&question.option_b_image_path)
            .bind(&question.option_c_text)
            .bind(&question.option_c_image_path)
            .bind(&question.option_d_text)
            .bind(&question.option_d_image_path)
            .bind(question.correct_answer.as_str())
            .bind(question.points)
            .bind(question.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", question.id))
            })
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
