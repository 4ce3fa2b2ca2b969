use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{CreateChapterRequest, UpdateChapterRequest},
        response::MessageResponse,
    },
};

#[get("/api/subjects/{id}/chapters")]
pub async fn list_chapters(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
    subject_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let chapters = state
        .chapter_service
        .list_chapters(subject_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(chapters))
}

#[get("/api/chapters/{id}")]
pub async fn get_chapter(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let chapter = state.chapter_service.get_chapter(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(chapter))
}

#[post("/admin/subjects/{id}/chapters")]
pub async fn create_chapter(
    state: web::Data<AppState>,
    _admin: AdminUser,
    subject_id: web::Path<i64>,
    request: web::Json<CreateChapterRequest>,
) -> Result<HttpResponse, AppError> {
    let chapter = state
        .chapter_service
        .create_chapter(subject_id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(chapter))
}

#[put("/admin/chapters/{id}")]
pub async fn update_chapter(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
    request: web::Json<UpdateChapterRequest>,
) -> Result<HttpResponse, AppError> {
    let chapter = state
        .chapter_service
        .update_chapter(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(chapter))
}

#[delete("/admin/chapters/{id}")]
pub async fn delete_chapter(
    state: web::Data<AppState>,
    _admin: AdminUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.chapter_service.delete_chapter(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Chapter {} deleted", id))))
}
