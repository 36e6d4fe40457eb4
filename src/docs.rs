use crate::model::application::{Application, BoxType, DeliveryType, ApplicationStatus};
use crate::model::role::Role;
use crate::model::user::UserSummary;
use crate::models::{LoginReqDto, LoginResponse};
use crate::service::admin::TrackingUpdate;
use crate::service::application::{StatusView, SubmitApplication};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gift Box API",
        version = "1.0.0",
        description = r#"
## Festival Gift Box Distribution

Employees log in, submit one application choosing a box type and a delivery
method, and track its status. Administrators list every application and attach
courier tracking details once an online order ships.

### Security
Protected endpoints read the HTTP-only `authorization` cookie set by
`POST /api/auth/login`. The cookie is valid for 24 hours.

### Response Format
Every response is an envelope `{code, msg, data?}`.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::list_users,
        crate::auth::handlers::logout,

        crate::api::application::submit_application,
        crate::api::application::application_status,

        crate::api::admin::list_applications,
        crate::api::admin::update_tracking
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            Role,
            UserSummary,
            SubmitApplication,
            StatusView,
            Application,
            BoxType,
            DeliveryType,
            ApplicationStatus,
            TrackingUpdate
        )
    ),
    modifiers(&SessionCookie),
    tags(
        (name = "Auth", description = "Login and session cookie"),
        (name = "Applications", description = "Employee self-service"),
        (name = "Admin", description = "Application listing and tracking updates"),
    )
)]
pub struct ApiDoc;

struct SessionCookie;

impl Modify for SessionCookie {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("authorization"))),
            );
        }
    }
}
