use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{CreateQuestionRequest, UpdateQuestionRequest},
        response::MessageResponse,
    },
};

/// Learner listing, answer key stripped.
#[get("/api/quizzes/{id}/questions")]
pub async fn list_question_views(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
    quiz_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let views = state
        .question_service
        .list_question_views(quiz_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(views))
}

#[get("/admin/quizzes/{id}/questions")]
pub async fn list_questions(
    state: web::Data<AppState>,
    _admin: AdminUser,
    quiz_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .question_service
        .list_questions(quiz_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/admin/quizzes/{id}/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    _admin: AdminUser,
    quiz_id: web::Path<i64>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .create_question(quiz_id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[put("/admin/questions/{id}")]
pub async fn update_question(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
    request: web::Json<UpdateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .question_service
        .update_question(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/admin/questions/{id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.question_service.delete_question(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Question {} deleted", id))))
}
