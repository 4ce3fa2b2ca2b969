use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{CreateSubjectRequest, UpdateSubjectRequest},
        response::MessageResponse,
    },
};

#[get("/api/subjects")]
pub async fn list_subjects(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let subjects = state.subject_service.list_subjects().await?;
    Ok(HttpResponse::Ok().json(subjects))
}

#[get("/api/subjects/{id}")]
pub async fn get_subject(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let subject = state.subject_service.get_subject(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(subject))
}

#[post("/admin/subjects")]
pub async fn create_subject(
    state: web::Data<AppState>,
    _admin: AdminUser,
    request: web::Json<CreateSubjectRequest>,
) -> Result<HttpResponse, AppError> {
    let subject = state
        .subject_service
        .create_subject(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(subject))
}

#[put("/admin/subjects/{id}")]
pub async fn update_subject(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
    request: web::Json<UpdateSubjectRequest>,
) -> Result<HttpResponse, AppError> {
    let subject = state
        .subject_service
        .update_subject(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(subject))
}

#[delete("/admin/subjects/{id}")]
pub async fn delete_subject(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.subject_service.delete_subject(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Subject {} deleted", id))))
}
