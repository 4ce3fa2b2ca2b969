use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Choice, NewQuestion, Question},
        dto::{
            request::{CreateQuestionRequest, UpdateQuestionRequest},
            response::QuestionView,
        },
    },
    repositories::{QuestionRepository, QuizRepository},
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
    quizzes: Arc<dyn QuizRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self {
            repository,
            quizzes,
        }
    }

    async fn ensure_quiz(&self, quiz_id: i64) -> AppResult<()> {
        if self.quizzes.find_by_id(quiz_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                quiz_id
            )));
        }
        Ok(())
    }

    pub async fn create_question(
        &self,
        quiz_id: i64,
        request: CreateQuestionRequest,
    ) -> AppResult<Question> {
        let request = request.normalized();
        request.validate()?;
        let correct_answer: Choice = request.correct_answer.parse()?;
        self.ensure_quiz(quiz_id).await?;

        let options = request.options;
        let question = self
            .repository
            .create(NewQuestion {
                quiz_id,
                question_text: request.question_text,
                question_image_path: request.question_image_path,
                option_a_text: options.option_a_text,
                option_a_image_path: options.option_a_image_path,
                option_b_text: options.option_b_text,
                option_b_image_path: options.option_b_image_path,
                option_c_text: options.option_c_text,
                option_c_image_path: options.option_c_image_path,
                option_d_text: options.option_d_text,
                option_d_image_path: options.option_d_image_path,
                correct_answer,
                points: request.points,
            })
            .await?;
        log::info!("Created question {} in quiz {}", question.id, quiz_id);

        Ok(question)
    }

    pub async fn get_question(&self, id: i64) -> AppResult<Question> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    /// Full questions, answer key included. Admin use only.
    pub async fn list_questions(&self, quiz_id: i64) -> AppResult<Vec<Question>> {
        self.ensure_quiz(quiz_id).await?;
        self.repository.find_by_quiz(quiz_id).await
    }

    pub async fn list_question_views(&self, quiz_id: i64) -> AppResult<Vec<QuestionView>> {
        let questions = self.list_questions(quiz_id).await?;
        Ok(questions.into_iter().map(QuestionView::from).collect())
    }

    pub async fn update_question(
        &self,
        id: i64,
        request: UpdateQuestionRequest,
    ) -> AppResult<Question> {
        let request = request.normalized();
        request.validate()?;
        let correct_answer = request
            .correct_answer
            .as_deref()
            .map(str::parse::<Choice>)
            .transpose()?;

        let mut question = self.get_question(id).await?;
        if let Some(text) = request.question_text {
            question.question_text = text;
        }
        if let Some(path) = request.question_image_path {
            question.question_image_path = Some(path);
        }

        let options = request.options;
        let slots = [
            (options.option_a_text, &mut question.option_a_text),
            (options.option_a_image_path, &mut question.option_a_image_path),
            (options.option_b_text, &mut question.option_b_text),
            (options.option_b_image_path, &mut question.option_b_image_path),
            (options.option_c_text, &mut question.option_c_text),
            (options.option_c_image_path, &mut question.option_c_image_path),
            (options.option_d_text, &mut question.option_d_text),
            (options.option_d_image_path, &mut question.option_d_image_path),
        ];
        for (incoming, stored) in slots {
            if incoming.is_some() {
                *stored = incoming;
            }
        }

        if let Some(choice) = correct_answer {
            question.correct_answer = choice;
        }
        if let Some(points) = request.points {
            question.points = points;
        }

        self.repository.update(question).await
    }

    pub async fn delete_question(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted question {}", id);
        Ok(())
    }
}
