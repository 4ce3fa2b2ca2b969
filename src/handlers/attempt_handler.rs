use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{AttemptFilter, SubmitAnswerRequest},
        response::{AttemptDetailDto, AttemptDto},
    },
};

/// 201 for a fresh attempt, 200 when an open one is resumed.
#[post("/api/quizzes/{id}/attempts")]
pub async fn start_attempt(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    quiz_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let (attempt, created) = state
        .attempt_service
        .start(&auth.0, quiz_id.into_inner())
        .await?;

    let body = AttemptDto::from(attempt);
    if created {
        Ok(HttpResponse::Created().json(body))
    } else {
        Ok(HttpResponse::Ok().json(body))
    }
}

#[get("/api/attempts")]
pub async fn list_attempts(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    filter: web::Query<AttemptFilter>,
) -> Result<HttpResponse, AppError> {
    let attempts = state
        .attempt_service
        .list_attempts(&auth.0, filter.into_inner().quiz_id)
        .await?;
    let body: Vec<AttemptDto> = attempts.into_iter().map(AttemptDto::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[get("/api/attempts/{id}")]
pub async fn get_attempt(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let (attempt, answers) = state
        .attempt_service
        .get_attempt(&auth.0, id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(AttemptDetailDto {
        attempt: AttemptDto::from(attempt),
        answers,
    }))
}

#[put("/api/attempts/{id}/answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    id: web::Path<i64>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let answer = state
        .attempt_service
        .submit_answer(&auth.0, id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(answer))
}

#[post("/api/attempts/{id}/finish")]
pub async fn finish_attempt(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let attempt = state
        .attempt_service
        .finish(&auth.0, id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(AttemptDto::from(attempt)))
}
