use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use cookie::{Cookie, SameSite};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, SetupDto},
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService, state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Cookie carrying the session token.
pub static AUTH_COOKIE_NAME: &str = "umbra_session";

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = UserDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    let token = state.jwt.issue(user.id)?;
    let cookie = session_cookie(token, state.jwt.ttl().num_seconds());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie.to_string())],
        Json(user.into_dto()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cookie cleared")
    ),
)]
pub async fn logout() -> impl IntoResponse {
    let cookie = session_cookie(String::new(), 0);

    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, cookie.to_string())],
    )
}

#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Currently authenticated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/setup",
    tag = AUTH_TAG,
    request_body = SetupDto,
    responses(
        (status = 201, description = "First admin account created", body = UserDto),
        (status = 400, description = "Setup code invalid, expired, or already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    Json(payload): Json<SetupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .setup_first_admin(
            &state.setup_codes,
            &payload.code,
            payload.email,
            payload.name,
            &payload.password,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Builds the session cookie with the attributes every response uses.
fn session_cookie(token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age_seconds))
        .build()
}
