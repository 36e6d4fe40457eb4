use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub employee_id: String,
    /// Argon2 PHC string
    pub password: String,
    pub role: String,
}

/// What the debug user listing exposes.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct UserSummary {
    #[schema(example = "e0001")]
    pub employee_id: String,
    #[schema(example = "employee")]
    pub role: String,
}
