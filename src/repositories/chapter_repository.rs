use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Chapter,
};

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn create(&self, subject_id: i64, name: &str, description: Option<&str>)
        -> AppResult<Chapter>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Chapter>>;
    async fn find_by_subject(&self, subject_id: i64) -> AppResult<Vec<Chapter>>;
    async fn update(&self, chapter: Chapter) -> AppResult<Chapter>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqlxChapterRepository {
    pool: SqlitePool,
}

impl SqlxChapterRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl ChapterRepository for SqlxChapterRepository {
    async fn create(
        &self,
        subject_id: i64,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Chapter> {
        let now = Utc::now();
        let chapter = sqlx::query_as::<_, Chapter>(
            "INSERT INTO chapters (subject_id, name, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, subject_id, name, description, created_at, updated_at",
        )
        .bind(subject_id)
        .bind(name)
        .bind(description)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(chapter)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Chapter>> {
        let chapter = sqlx::query_as::<_, Chapter>(
            "SELECT id, subject_id, name, description, created_at, updated_at
             FROM chapters WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(chapter)
    }

    async fn find_by_subject(&self, subject_id: i64) -> AppResult<Vec<Chapter>> {
        let chapters = sqlx::query_as::<_, Chapter>(
            "SELECT id, subject_id, name, description, created_at, updated_at
             FROM chapters WHERE subject_id = ? ORDER BY id",
        )
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(chapters)
    }

    async fn update(&self, chapter: Chapter) -> AppResult<Chapter> {
        sqlx::query_as::<_, Chapter>(
            "UPDATE chapters SET name = ?, description = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, subject_id, name, description, created_at, updated_at",
        )
        .bind(&chapter.name)
        .bind(&chapter.description)
        .bind(chapter.updated_at)
        .bind(chapter.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Chapter with id '{}' not found", chapter.id)))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM chapters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Chapter with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
