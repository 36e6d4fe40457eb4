use actix_web::http::StatusCode;
use serde::Serialize;

/// JSON envelope shared by every endpoint: `{code, msg, data?}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(msg: impl Into<String>, data: T) -> Self {
        Self::with_code(StatusCode::OK, msg, data)
    }

    pub fn with_code(code: StatusCode, msg: impl Into<String>, data: T) -> Self {
        Self {
            code: code.as_u16(),
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// Envelope without a `data` field.
    pub fn message(code: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code: code.as_u16(),
            msg: msg.into(),
            data: None,
        }
    }
}
