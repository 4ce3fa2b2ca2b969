use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, auth::AdminUser, errors::AppError, models::dto::response::UserDto,
};

#[get("/admin/users")]
pub async fn list_users(
    state: web::Data<AppState>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserDto> = state
        .user_service
        .list_users()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();
    Ok(HttpResponse::Ok().json(users))
}
