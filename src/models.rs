use crate::model::role::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login body. Fields are optional so that an absent field is reported as
/// `CredentialsRequired` instead of a JSON decoding error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "e0001")]
    pub employee_id: Option<String>,
    #[schema(example = "password1")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "e0001")]
    pub employee_id: String,
    pub role: Role,
}

/// Session token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub employee_id: String,
    pub role: Role,
    pub iat: u64,
    pub exp: u64,
    pub jti: String,
}
