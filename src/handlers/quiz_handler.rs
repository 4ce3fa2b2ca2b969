use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{CreateQuizRequest, UpdateQuizRequest},
        response::MessageResponse,
    },
};

#[get("/api/chapters/{id}/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
    chapter_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quizzes = state
        .quiz_service
        .list_quizzes(chapter_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/admin/chapters/{id}/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    _admin: AdminUser,
    chapter_id: web::Path<i64>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(chapter_id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

/// Also how a quiz is switched on or off.
#[put("/admin/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
    request: web::Json<UpdateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/admin/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.quiz_service.delete_quiz(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Quiz {} deleted", id))))
}
