use crate::{
    auth::auth::SESSION_COOKIE,
    config::Config,
    error::ApiError,
    models::{LoginReqDto, LoginResponse},
    repository::user::list_users as fetch_users,
    response::ApiResponse,
    service::auth,
};
use actix_web::{
    HttpResponse,
    cookie::{Cookie, SameSite, time::Duration},
    web,
};
use sqlx::SqlitePool;
use tracing::{info, instrument};

fn session_cookie(token: String, ttl: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(ttl))
        .finish()
}

/// Log in with employee id and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = Object, example = json!({
            "code": 200,
            "msg": "Login successful",
            "data": { "employee_id": "e0001", "role": "employee" }
        })),
        (status = 400, description = "Missing fields, short password or malformed employee id"),
        (status = 401, description = "Invalid employee ID or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(pool, config, user),
    fields(employee_id = user.employee_id.as_deref().unwrap_or_default())
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");

    let (token, identity): (String, LoginResponse) =
        auth::login(pool.get_ref(), config.get_ref(), &user)
            .await
            .inspect_err(|e| info!(error = %e, "Login rejected"))?;

    info!(role = %identity.role, "Login successful");

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token, config.session_ttl))
        .json(ApiResponse::ok("Login successful", identity)))
}

/// List every user (debug only, unauthenticated)
#[utoipa::path(
    get,
    path = "/api/auth/login",
    responses(
        (status = 200, description = "All users, without credentials", body = Object, example = json!({
            "code": 200,
            "msg": "Users retrieved successfully",
            "data": [{ "employee_id": "admin", "role": "admin" }]
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn list_users(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let users = fetch_users(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("Users retrieved successfully", users)))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = Object, example = json!({
            "code": 200,
            "msg": "Logged out"
        }))
    ),
    tag = "Auth"
)]
pub async fn logout() -> HttpResponse {
    let mut cookie = session_cookie(String::new(), 0);
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::<()>::message(actix_web::http::StatusCode::OK, "Logged out"))
}
