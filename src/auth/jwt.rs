use crate::{model::role::Role, models::Claims};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error};
use uuid::Uuid;

fn now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Signs a session token for `employee_id` valid for `ttl` seconds.
pub fn issue_session_token(
    employee_id: &str,
    role: Role,
    secret: &str,
    ttl: i64,
) -> Result<String, Error> {
    let iat = now();
    let claims = Claims {
        employee_id: employee_id.to_string(),
        role,
        iat,
        exp: iat + ttl.max(0) as u64,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Checks signature and expiry.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
