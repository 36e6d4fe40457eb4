use crate::auth::auth::AuthUser;
use crate::config::Config;
use crate::error::ApiError;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, ResponseError,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use tracing::debug;

/// Rejects requests without a valid session cookie and stores the decoded
/// `AuthUser` in request extensions.
pub async fn session_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;

    let auth_user = match AuthUser::from_session_cookie(req.request(), &config.session_secret) {
        Some(user) => user,
        None => {
            debug!(path = %req.path(), "Rejected request without a valid session");
            let resp = ApiError::Unauthorized.error_response();
            return Ok(req.into_response(resp));
        }
    };

    req.extensions_mut().insert(auth_user);

    next.call(req).await
}
