use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Subject,
};

#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn create(&self, name: &str, description: Option<&str>) -> AppResult<Subject>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Subject>>;
    async fn find_all(&self) -> AppResult<Vec<Subject>>;
    async fn update(&self, subject: Subject) -> AppResult<Subject>;
    /// Chapters, quizzes, questions and attempts below the subject go with it.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqlxSubjectRepository {
    pool: SqlitePool,
}

impl SqlxSubjectRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

fn duplicate_name(err: sqlx::Error, name: &str) -> AppError {
    match AppError::from(err) {
        AppError::AlreadyExists(_) => {
            AppError::AlreadyExists(format!("Subject with name '{}' already exists", name))
        }
        other => other,
    }
}

#[async_trait]
impl SubjectRepository for SqlxSubjectRepository {
    async fn create(&self, name: &str, description: Option<&str>) -> AppResult<Subject> {
        let now = Utc::now();
        sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (name, description, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, description, created_at, updated_at",
        )
        .bind(name)
        .bind(description)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| duplicate_name(err, name))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Subject>> {
        let subject = sqlx::query_as::<_, Subject>(
            "SELECT id, name, description, created_at, updated_at FROM subjects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(subject)
    }

    async fn find_all(&self) -> AppResult<Vec<Subject>> {
        let subjects = sqlx::query_as::<_, Subject>(
            "SELECT id, name, description, created_at, updated_at FROM subjects ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(subjects)
    }

    async fn update(&self, subject: Subject) -> AppResult<Subject> {
        sqlx::query_as::<_, Subject>(
            "UPDATE subjects SET name = ?, description = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, name, description, created_at, updated_at",
        )
        .bind(&subject.name)
        .bind(&subject.description)
        .bind(subject.updated_at)
        .bind(subject.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| duplicate_name(err, &subject.name))?
        .ok_or_else(|| AppError::NotFound(format!("Subject with id '{}' not found", subject.id)))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Subject with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
