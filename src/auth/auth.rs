use crate::{auth::jwt::verify_token, error::ApiError, model::role::Role};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures::future::{Ready, ready};

/// Name of the HTTP-only cookie carrying the session token.
pub const SESSION_COOKIE: &str = "authorization";

#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub employee_id: String,
    pub role: Role,
}

impl AuthUser {
    /// Decodes the session cookie. Missing, tampered and expired tokens all
    /// come back as `None`.
    pub fn from_session_cookie(req: &HttpRequest, secret: &str) -> Option<Self> {
        let cookie = req.cookie(SESSION_COOKIE)?;
        let claims = verify_token(cookie.value(), secret).ok()?;

        Some(AuthUser {
            employee_id: claims.employee_id,
            role: claims.role,
        })
    }

    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

/// Resolved by `session_middleware`; handlers outside a protected scope get
/// `Unauthorized`.
impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or(ApiError::Unauthorized),
        )
    }
}
