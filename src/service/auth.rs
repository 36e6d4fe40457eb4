use crate::{
    auth::{jwt::issue_session_token, password::verify_password},
    config::Config,
    error::ApiError,
    model::role::Role,
    models::{LoginReqDto, LoginResponse},
    repository::user::find_by_employee_id,
};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{error, info};

const MIN_PASSWORD_LEN: usize = 5;

/// `admin`, or `e` followed by exactly four ASCII digits.
pub fn is_valid_employee_id(employee_id: &str) -> bool {
    if employee_id == "admin" {
        return true;
    }
    match employee_id.strip_prefix('e') {
        Some(digits) => digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Shape checks, in order, before the store is consulted.
pub fn validate_login(req: &LoginReqDto) -> Result<(&str, &str), ApiError> {
    let (employee_id, password) = match (req.employee_id.as_deref(), req.password.as_deref()) {
        (Some(id), Some(pw)) if !id.is_empty() && !pw.is_empty() => (id, pw),
        _ => return Err(ApiError::CredentialsRequired),
    };

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::PasswordTooShort);
    }

    if !is_valid_employee_id(employee_id) {
        return Err(ApiError::InvalidIdFormat);
    }

    Ok((employee_id, password))
}

/// Authenticates and mints a session token. Returns the token and the
/// identity it carries.
pub async fn login(
    pool: &SqlitePool,
    config: &Config,
    req: &LoginReqDto,
) -> Result<(String, LoginResponse), ApiError> {
    let (employee_id, password) = validate_login(req)?;

    let user = match find_by_employee_id(pool, employee_id).await? {
        Some(user) => user,
        None => {
            info!("Invalid credentials: user not found");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if let Err(e) = verify_password(password, &user.password) {
        info!(error = %e, "Invalid credentials: password mismatch");
        return Err(ApiError::InvalidCredentials);
    }

    let role = Role::from_str(&user.role).map_err(|e| {
        error!(error = %e, role = %user.role, "Stored role is not recognised");
        ApiError::Internal
    })?;

    let token = issue_session_token(&user.employee_id, role, &config.session_secret, config.session_ttl)
        .map_err(|e| {
            error!(error = %e, "Failed to sign session token");
            ApiError::Internal
        })?;

    Ok((
        token,
        LoginResponse {
            employee_id: user.employee_id,
            role,
        },
    ))
}
