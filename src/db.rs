use crate::auth::password::hash_password;
use crate::model::role::Role;
use crate::repository::user::insert_user;
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL: {database_url}"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    info!("Database ready");
    Ok(pool)
}

/// Seeds the admin account and employees `e0001..e0010`.
/// Existing rows are left untouched, so this is safe on every start.
pub async fn seed_users(pool: &SqlitePool) -> Result<()> {
    let mut accounts = vec![("admin".to_string(), "admin123".to_string(), Role::Admin)];
    for i in 1..=10 {
        accounts.push((format!("e{i:04}"), format!("password{i}"), Role::Employee));
    }

    let mut inserted = 0;
    for (employee_id, password, role) in accounts {
        let hashed = hash_password(&password).context("Failed to hash seed password")?;
        if insert_user(pool, &employee_id, &hashed, role).await? {
            inserted += 1;
        }
    }

    info!(inserted, "Seed users checked");
    Ok(())
}

/// Single-connection in-memory database with the schema applied.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

/// File-backed database shared by several pooled connections, for tests
/// that need real concurrent writers.
#[cfg(test)]
pub async fn test_file_pool(path: &std::path::Path, max_connections: u32) -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(10));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

/// Inserts a single user for tests, hashing the password like the seed does.
#[cfg(test)]
pub async fn add_test_user(pool: &SqlitePool, employee_id: &str, password: &str, role: Role) {
    let hashed = hash_password(password).unwrap();
    insert_user(pool, employee_id, &hashed, role).await.unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::{find_by_employee_id, list_users};

    #[actix_web::test]
    async fn seed_is_idempotent() {
        let pool = test_pool().await;

        seed_users(&pool).await.unwrap();
        seed_users(&pool).await.unwrap();

        let users = list_users(&pool).await.unwrap();
        assert_eq!(users.len(), 11);
        assert_eq!(users.iter().filter(|u| u.role == "admin").count(), 1);

        let e0010 = find_by_employee_id(&pool, "e0010").await.unwrap().unwrap();
        assert_eq!(e0010.role, "employee");
        assert_ne!(e0010.password, "password10");
    }
}
