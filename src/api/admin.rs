use crate::{
    auth::auth::AuthUser,
    error::ApiError,
    response::ApiResponse,
    service::admin::{self, TrackingUpdate},
};
use actix_web::{HttpResponse, http::StatusCode, web};
use sqlx::SqlitePool;
use tracing::instrument;

/// All applications, newest first (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/applications",
    responses(
        (status = 200, description = "Every application with its owner", body = Object, example = json!({
            "code": 200,
            "msg": "Applications retrieved successfully",
            "data": [{
                "id": 1,
                "employee_id": "e0001",
                "box_type": "halal",
                "delivery_type": "online",
                "status": "pending",
                "address": "12 Elm St",
                "tracking_number": null,
                "courier_company": null,
                "created_at": "2026-09-01 08:00:00",
                "updated_at": "2026-09-01 08:00:00"
            }]
        })),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Admin"
)]
#[instrument(name = "list_applications", skip_all, fields(employee_id = %auth.employee_id))]
pub async fn list_applications(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let applications = admin::list_all(pool.get_ref(), &auth).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Applications retrieved successfully",
        applications,
    )))
}

/// Attach courier details to an online application (admin only)
#[utoipa::path(
    patch,
    path = "/api/admin/applications",
    request_body = TrackingUpdate,
    responses(
        (status = 200, description = "Application completed", body = Object, example = json!({
            "code": 200,
            "msg": "Tracking information updated successfully"
        })),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Application not found or not eligible for tracking update"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Admin"
)]
#[instrument(name = "update_tracking", skip_all, fields(employee_id = %auth.employee_id))]
pub async fn update_tracking(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<TrackingUpdate>,
) -> Result<HttpResponse, ApiError> {
    admin::update_tracking(pool.get_ref(), &auth, &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(
        StatusCode::OK,
        "Tracking information updated successfully",
    )))
}
