use crate::model::{
    role::Role,
    user::{User, UserSummary},
};
use sqlx::SqlitePool;

pub async fn find_by_employee_id(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT employee_id, password, role
        FROM users
        WHERE employee_id = ?
        "#,
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>("SELECT employee_id, role FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Returns `false` when the employee id is already taken.
pub async fn insert_user(
    pool: &SqlitePool,
    employee_id: &str,
    password_hash: &str,
    role: Role,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (employee_id, password, role)
        VALUES (?, ?, ?)
        ON CONFLICT(employee_id) DO NOTHING
        "#,
    )
    .bind(employee_id)
    .bind(password_hash)
    .bind(role.as_ref())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}
