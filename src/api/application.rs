use crate::{
    auth::auth::AuthUser,
    error::ApiError,
    response::ApiResponse,
    service::application::{self, ApplicationState, SubmitApplication},
};
use actix_web::{HttpResponse, http::StatusCode, web};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::instrument;

/// Submit the caller's gift box application
#[utoipa::path(
    post,
    path = "/api/applications",
    request_body(
        content = SubmitApplication,
        description = "Box and delivery choice; address only for online delivery",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Application submitted", body = Object, example = json!({
            "code": 200,
            "msg": "Application submitted successfully",
            "data": { "status": "pending" }
        })),
        (status = 400, description = "Invalid box type, delivery type or address"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Already applied"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Applications"
)]
#[instrument(name = "submit_application", skip_all, fields(employee_id = %auth.employee_id))]
pub async fn submit_application(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<SubmitApplication>,
) -> Result<HttpResponse, ApiError> {
    application::submit(pool.get_ref(), &auth, &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Application submitted successfully",
        json!({ "status": "pending" }),
    )))
}

/// Status of the caller's application
#[utoipa::path(
    get,
    path = "/api/applications/status",
    responses(
        (status = 200, description = "Envelope code 200 with the application, or 404 with status not_applied", body = Object, example = json!({
            "code": 404,
            "msg": "No application found",
            "data": { "status": "not_applied" }
        })),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Applications"
)]
#[instrument(name = "application_status", skip_all, fields(employee_id = %auth.employee_id))]
pub async fn application_status(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    // not_applied keeps HTTP 200; only the envelope code says 404
    let resp = match application::status(pool.get_ref(), &auth).await? {
        ApplicationState::Applied(view) => {
            HttpResponse::Ok().json(ApiResponse::ok("Application found", view))
        }
        ApplicationState::NotApplied => HttpResponse::Ok().json(ApiResponse::with_code(
            StatusCode::NOT_FOUND,
            "No application found",
            json!({ "status": "not_applied" }),
        )),
    };

    Ok(resp)
}
