use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Chapter,
        dto::request::{CreateChapterRequest, UpdateChapterRequest},
    },
    repositories::{ChapterRepository, SubjectRepository},
};

pub struct ChapterService {
    repository: Arc<dyn ChapterRepository>,
    subjects: Arc<dyn SubjectRepository>,
}

impl ChapterService {
    pub fn new(
        repository: Arc<dyn ChapterRepository>,
        subjects: Arc<dyn SubjectRepository>,
    ) -> Self {
        Self {
            repository,
            subjects,
        }
    }

    async fn ensure_subject(&self, subject_id: i64) -> AppResult<()> {
        if self.subjects.find_by_id(subject_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Subject with id '{}' not found",
                subject_id
            )));
        }
        Ok(())
    }

    pub async fn create_chapter(
        &self,
        subject_id: i64,
        request: CreateChapterRequest,
    ) -> AppResult<Chapter> {
        let request = request.normalized();
        request.validate()?;
        self.ensure_subject(subject_id).await?;

        let chapter = self
            .repository
            .create(subject_id, &request.name, request.description.as_deref())
            .await?;
        log::info!("Created chapter {} under subject {}", chapter.id, subject_id);

        Ok(chapter)
    }

    pub async fn get_chapter(&self, id: i64) -> AppResult<Chapter> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Chapter with id '{}' not found", id)))
    }

    pub async fn list_chapters(&self, subject_id: i64) -> AppResult<Vec<Chapter>> {
        self.ensure_subject(subject_id).await?;
        self.repository.find_by_subject(subject_id).await
    }

    pub async fn update_chapter(&self, id: i64, request: UpdateChapterRequest) -> AppResult<Chapter> {
        let request = request.normalized();
        request.validate()?;

        let mut chapter = self.get_chapter(id).await?;
        if let Some(name) = request.name {
            chapter.name = name;
        }
        if let Some(description) = request.description {
            chapter.description = Some(description);
        }
        chapter.updated_at = Utc::now();

        self.repository.update(chapter).await
    }

    pub async fn delete_chapter(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted chapter {} and everything below it", id);
        Ok(())
    }
}
