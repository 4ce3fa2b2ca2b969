use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{NewQuiz, Quiz},
        dto::request::{CreateQuizRequest, UpdateQuizRequest},
    },
    repositories::{ChapterRepository, QuizRepository},
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    chapters: Arc<dyn ChapterRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>, chapters: Arc<dyn ChapterRepository>) -> Self {
        Self {
            repository,
            chapters,
        }
    }

    async fn ensure_chapter(&self, chapter_id: i64) -> AppResult<()> {
        if self.chapters.find_by_id(chapter_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Chapter with id '{}' not found",
                chapter_id
            )));
        }
        Ok(())
    }

    pub async fn create_quiz(&self, chapter_id: i64, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;
        self.ensure_chapter(chapter_id).await?;

        let quiz = self
            .repository
            .create(NewQuiz {
                chapter_id,
                quiz_date: request.quiz_date,
                duration_minutes: request.duration_minutes,
                remarks: request.remarks,
                is_active: request.is_active,
            })
            .await?;
        log::info!("Created quiz {} under chapter {}", quiz.id, chapter_id);

        Ok(quiz)
    }

    pub async fn get_quiz(&self, id: i64) -> AppResult<Quiz> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    pub async fn list_quizzes(&self, chapter_id: i64) -> AppResult<Vec<Quiz>> {
        self.ensure_chapter(chapter_id).await?;
        self.repository.find_by_chapter(chapter_id).await
    }

    pub async fn update_quiz(&self, id: i64, request: UpdateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let mut quiz = self.get_quiz(id).await?;
        if let Some(quiz_date) = request.quiz_date {
            quiz.quiz_date = quiz_date;
        }
        if let Some(duration_minutes) = request.duration_minutes {
            quiz.duration_minutes = duration_minutes;
        }
        if let Some(remarks) = request.remarks {
            quiz.remarks = Some(remarks);
        }
        if let Some(is_active) = request.is_active {
            quiz.is_active = is_active;
        }

        self.repository.update(quiz).await
    }

    pub async fn delete_quiz(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted quiz {} with its questions and attempts", id);
        Ok(())
    }
}
