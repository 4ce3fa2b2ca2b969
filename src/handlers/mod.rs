pub mod attempt_handler;
pub mod auth_handler;
pub mod chapter_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;
pub mod subject_handler;
pub mod user_handler;

use actix_web::web;

use crate::errors::AppError;

/// Registers every route. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .service(health_handler::index)
    .service(health_handler::health_check)
    .service(health_handler::health_check_ready)
    .service(health_handler::health_check_live)
    .service(auth_handler::register)
    .service(auth_handler::login_hint)
    .service(auth_handler::login)
    .service(auth_handler::logout)
    .service(auth_handler::me)
    .service(subject_handler::list_subjects)
    .service(subject_handler::get_subject)
    .service(subject_handler::create_subject)
    .service(subject_handler::update_subject)
    .service(subject_handler::delete_subject)
    .service(chapter_handler::list_chapters)
    .service(chapter_handler::get_chapter)
    .service(chapter_handler::create_chapter)
    .service(chapter_handler::update_chapter)
    .service(chapter_handler::delete_chapter)
    .service(quiz_handler::list_quizzes)
    .service(quiz_handler::get_quiz)
    .service(quiz_handler::create_quiz)
    .service(quiz_handler::update_quiz)
    .service(quiz_handler::delete_quiz)
    .service(question_handler::list_question_views)
    .service(question_handler::list_questions)
    .service(question_handler::create_question)
    .service(question_handler::update_question)
    .service(question_handler::delete_question)
    .service(attempt_handler::start_attempt)
    .service(attempt_handler::list_attempts)
    .service(attempt_handler::get_attempt)
    .service(attempt_handler::submit_answer)
    .service(attempt_handler::finish_attempt)
    .service(user_handler::list_users);
}
