use crate::model::application::{Application, ApplicationStatus, DeliveryType, NewApplication};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, employee_id, box_type, delivery_type, status, address, \
                       tracking_number, courier_company, created_at, updated_at";

/// Inserts a pending application unless one already exists for the employee.
/// The check and the insert are one statement, backed by the unique index on
/// `employee_id`. Returns the new row id, or `None` on conflict.
pub async fn create_if_absent(
    pool: &SqlitePool,
    employee_id: &str,
    new: &NewApplication,
) -> Result<Option<i64>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO applications (employee_id, box_type, delivery_type, address, status)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(employee_id) DO NOTHING
        "#,
    )
    .bind(employee_id)
    .bind(new.box_type.as_ref())
    .bind(new.delivery_type.as_ref())
    .bind(new.address.as_deref())
    .bind(ApplicationStatus::Pending.as_ref())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    Ok(Some(result.last_insert_rowid()))
}

pub async fn find_by_owner(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Option<Application>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM applications WHERE employee_id = ?");

    sqlx::query_as::<_, Application>(&sql)
        .bind(employee_id)
        .fetch_optional(pool)
        .await
}

/// All applications joined with their owner, newest first.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        r#"
        SELECT a.id, u.employee_id, a.box_type, a.delivery_type, a.status, a.address,
               a.tracking_number, a.courier_company, a.created_at, a.updated_at
        FROM applications a
        JOIN users u ON a.employee_id = u.employee_id
        ORDER BY a.created_at DESC, a.id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Attaches courier details to an online application and completes it.
/// Returns `false` when no online application has this id.
pub async fn update_tracking(
    pool: &SqlitePool,
    id: i64,
    tracking_number: &str,
    courier_company: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE applications
        SET tracking_number = ?,
            courier_company = ?,
            status = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        AND delivery_type = ?
        "#,
    )
    .bind(tracking_number)
    .bind(courier_company)
    .bind(ApplicationStatus::Completed.as_ref())
    .bind(id)
    .bind(DeliveryType::Online.as_ref())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
