use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    get, post, web, HttpRequest, HttpResponse,
};

use crate::{
    app_state::AppState,
    auth::{middleware::session_token, AuthenticatedUser, SESSION_COOKIE},
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::{ApiResponse, LoginResponse, MessageResponse, UserDto},
    },
};

fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(CookieDuration::hours(state.config.session_ttl_hours))
        .finish()
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[post("/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::new(
        UserDto::from(user),
        "Registration successful, please log in",
    )))
}

/// Where the gate sends anonymous requests.
#[get("/auth/login")]
pub async fn login_hint() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(
        "Please log in by posting your email and password to /auth/login",
    ))
}

#[post("/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.authenticate(request.into_inner()).await?;
    let issued = state.sessions.login(&user).await?;

    let cookie = session_cookie(&state, issued.token.clone());
    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: UserDto::from(user),
    }))
}

#[post("/auth/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
    if let Some(token) = session_token(&req) {
        state.sessions.logout(&token).await?;
    }

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(MessageResponse::new("Logged out")))
}

#[get("/auth/me")]
pub async fn me(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(auth.0.id).await?;
    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}
