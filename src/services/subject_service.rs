use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Subject,
        dto::request::{CreateSubjectRequest, UpdateSubjectRequest},
    },
    repositories::SubjectRepository,
};

pub struct SubjectService {
    repository: Arc<dyn SubjectRepository>,
}

impl SubjectService {
    pub fn new(repository: Arc<dyn SubjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_subject(&self, request: CreateSubjectRequest) -> AppResult<Subject> {
        let request = request.normalized();
        request.validate()?;

        let subject = self
            .repository
            .create(&request.name, request.description.as_deref())
            .await?;
        log::info!("Created subject {} '{}'", subject.id, subject.name);

        Ok(subject)
    }

    pub async fn get_subject(&self, id: i64) -> AppResult<Subject> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Subject with id '{}' not found", id)))
    }

    pub async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.repository.find_all().await
    }

    pub async fn update_subject(&self, id: i64, request: UpdateSubjectRequest) -> AppResult<Subject> {
        let request = request.normalized();
        request.validate()?;

        let mut subject = self.get_subject(id).await?;
        if let Some(name) = request.name {
            subject.name = name;
        }
        if let Some(description) = request.description {
            subject.description = Some(description);
        }
        subject.updated_at = Utc::now();

        self.repository.update(subject).await
    }

    pub async fn delete_subject(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted subject {} and everything below it", id);
        Ok(())
    }
}
