use crate::response::ApiResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use tracing::error;

/// Every failure a request can end in. The HTTP status doubles as the
/// envelope `code`.
#[derive(Debug, Display, PartialEq)]
pub enum ApiError {
    #[display(fmt = "Unauthorized")]
    Unauthorized,

    #[display(fmt = "Missing required fields")]
    MissingFields,
    #[display(fmt = "Employee ID and password are required")]
    CredentialsRequired,
    #[display(fmt = "Password must be at least 5 characters")]
    PasswordTooShort,
    #[display(fmt = "Invalid employee ID format")]
    InvalidIdFormat,
    #[display(fmt = "Invalid employee ID or password")]
    InvalidCredentials,

    #[display(fmt = "Invalid box type")]
    InvalidBoxType,
    #[display(fmt = "Invalid delivery type")]
    InvalidDeliveryType,
    #[display(fmt = "Address is required for online delivery")]
    AddressRequired,
    #[display(fmt = "Address is too long")]
    AddressTooLong,
    #[display(fmt = "{}", _0)]
    BadRequest(String),

    #[display(fmt = "You have already submitted an application")]
    AlreadyApplied,
    #[display(fmt = "Application not found or not eligible for tracking update")]
    NotEligible,

    #[display(fmt = "Internal server error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::AlreadyApplied => StatusCode::CONFLICT,
            ApiError::NotEligible => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ApiResponse::<()>::message(status, self.to_string()))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        error!(error = %e, "Database error");
        ApiError::Internal
    }
}
