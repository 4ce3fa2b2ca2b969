use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    auth::{require_owner_or_admin, CurrentUser},
    errors::{AppError, AppResult},
    models::{
        domain::{Choice, QuizAttempt, UserAnswer},
        dto::request::SubmitAnswerRequest,
    },
    repositories::{QuestionRepository, QuizAttemptRepository, QuizRepository},
};

/// Drives an attempt from start through answers to a scored finish.
pub struct QuizAttemptService {
    repository: Arc<dyn QuizAttemptRepository>,
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuizAttemptService {
    pub fn new(
        repository: Arc<dyn QuizAttemptRepository>,
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            repository,
            quizzes,
            questions,
        }
    }

    /// Opens an attempt for `user` on `quiz_id`, or returns the one already
    /// open. The flag is true when a new attempt was created.
    pub async fn start(&self, user: &CurrentUser, quiz_id: i64) -> AppResult<(QuizAttempt, bool)> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        if !quiz.is_active {
            return Err(AppError::QuizInactive(quiz.id));
        }

        let (attempt, created) = self
            .repository
            .create_or_resume(user.id, quiz.id, Utc::now())
            .await?;

        if created {
            log::info!("User {} started attempt {} on quiz {}", user.id, attempt.id, quiz.id);
        } else {
            log::debug!("User {} resumed attempt {} on quiz {}", user.id, attempt.id, quiz.id);
        }

        Ok((attempt, created))
    }

    async fn load_attempt(&self, attempt_id: i64) -> AppResult<QuizAttempt> {
        self.repository
            .find_by_id(attempt_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attempt with id '{}' not found", attempt_id)))
    }

    /// Only the attempt's owner may answer; admins can look but not play.
    pub async fn submit_answer(
        &self,
        user: &CurrentUser,
        attempt_id: i64,
        request: SubmitAnswerRequest,
    ) -> AppResult<UserAnswer> {
        request.validate()?;

        let attempt = self.load_attempt(attempt_id).await?;
        if attempt.user_id != user.id {
            return Err(AppError::Forbidden(
                "You can only answer your own attempts".to_string(),
            ));
        }
        if attempt.is_completed {
            return Err(AppError::InvalidState(format!(
                "Attempt {} is already completed",
                attempt.id
            )));
        }

        let choice: Choice = request.choice.parse()?;

        let question = self
            .questions
            .find_by_id(request.question_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", request.question_id))
            })?;
        if question.quiz_id != attempt.quiz_id {
            return Err(AppError::Validation(format!(
                "Question {} does not belong to quiz {}",
                question.id, attempt.quiz_id
            )));
        }

        self.repository
            .upsert_answer(attempt.id, question.id, choice)
            .await
    }

    pub async fn finish(&self, user: &CurrentUser, attempt_id: i64) -> AppResult<QuizAttempt> {
        let attempt = self.load_attempt(attempt_id).await?;
        if attempt.user_id != user.id {
            return Err(AppError::Forbidden(
                "You can only finish your own attempts".to_string(),
            ));
        }

        let finished = self.repository.complete(attempt.id, Utc::now()).await?;
        log::info!(
            "User {} finished attempt {} on quiz {} with score {}",
            user.id,
            finished.id,
            finished.quiz_id,
            finished.score
        );

        Ok(finished)
    }

    pub async fn get_attempt(
        &self,
        user: &CurrentUser,
        attempt_id: i64,
    ) -> AppResult<(QuizAttempt, Vec<UserAnswer>)> {
        let attempt = self.load_attempt(attempt_id).await?;
        require_owner_or_admin(user, attempt.user_id)?;

        let answers = self.repository.find_answers(attempt.id).await?;
        Ok((attempt, answers))
    }

    pub async fn list_attempts(
        &self,
        user: &CurrentUser,
        quiz_id: Option<i64>,
    ) -> AppResult<Vec<QuizAttempt>> {
        self.repository.list_for_user(user.id, quiz_id).await
    }
}
