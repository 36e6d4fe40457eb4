use crate::{
    auth::auth::AuthUser,
    error::ApiError,
    model::application::Application,
    repository::application::{find_all, update_tracking as store_tracking},
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TrackingUpdate {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "SF-123")]
    pub tracking_number: Option<String>,
    #[schema(example = "SF Express")]
    pub courier_company: Option<String>,
}

pub async fn list_all(pool: &SqlitePool, user: &AuthUser) -> Result<Vec<Application>, ApiError> {
    user.require_admin()?;
    Ok(find_all(pool).await?)
}

/// Attaches courier details and completes an online application. Re-running
/// it overwrites the previous details.
pub async fn update_tracking(
    pool: &SqlitePool,
    user: &AuthUser,
    req: &TrackingUpdate,
) -> Result<(), ApiError> {
    user.require_admin()?;

    let present = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);
    let (id, tracking_number, courier_company) =
        match (req.id, present(&req.tracking_number), present(&req.courier_company)) {
            (Some(id), Some(t), Some(c)) if id != 0 => (id, t, c),
            _ => return Err(ApiError::MissingFields),
        };

    if !store_tracking(pool, id, &tracking_number, &courier_company).await? {
        info!(application_id = id, "Tracking update rejected: not eligible");
        return Err(ApiError::NotEligible);
    }

    info!(application_id = id, "Tracking information updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{add_test_user, test_pool};
    use crate::model::role::Role;
    use crate::service::application::{SubmitApplication, submit};

    fn admin() -> AuthUser {
        AuthUser {
            employee_id: "admin".to_string(),
            role: Role::Admin,
        }
    }

    fn employee(id: &str) -> AuthUser {
        AuthUser {
            employee_id: id.to_string(),
            role: Role::Employee,
        }
    }

    fn tracking(id: i64, number: &str, courier: &str) -> TrackingUpdate {
        TrackingUpdate {
            id: Some(id),
            tracking_number: Some(number.to_string()),
            courier_company: Some(courier.to_string()),
        }
    }

    async fn apply(pool: &SqlitePool, id: &str, delivery: &str) -> i64 {
        add_test_user(pool, id, "password1", Role::Employee).await;
        let address = (delivery == "online").then(|| "12 Elm St".to_string());
        submit(
            pool,
            &employee(id),
            &SubmitApplication {
                box_type: Some("regular".to_string()),
                delivery_type: Some(delivery.to_string()),
                address,
            },
        )
        .await
        .unwrap()
    }

    #[actix_web::test]
    async fn employees_cannot_use_admin_operations() {
        let pool = test_pool().await;
        let user = employee("e0001");

        assert_eq!(list_all(&pool, &user).await.unwrap_err(), ApiError::Unauthorized);
        assert_eq!(
            update_tracking(&pool, &user, &tracking(1, "T", "C")).await,
            Err(ApiError::Unauthorized)
        );
    }

    #[actix_web::test]
    async fn missing_fields_are_rejected_before_lookup() {
        let pool = test_pool().await;
        let mut req = tracking(1, "SF-1", "SF");
        req.courier_company = None;
        assert_eq!(update_tracking(&pool, &admin(), &req).await, Err(ApiError::MissingFields));
        assert_eq!(
            update_tracking(&pool, &admin(), &TrackingUpdate::default()).await,
            Err(ApiError::MissingFields)
        );
    }

    #[actix_web::test]
    async fn offline_and_unknown_ids_are_equally_ineligible() {
        let pool = test_pool().await;
        let offline_id = apply(&pool, "e0001", "offline").await;

        let offline = update_tracking(&pool, &admin(), &tracking(offline_id, "T", "C")).await;
        let unknown = update_tracking(&pool, &admin(), &tracking(offline_id + 100, "T", "C")).await;
        assert_eq!(offline, Err(ApiError::NotEligible));
        assert_eq!(offline, unknown);

        let rows = list_all(&pool, &admin()).await.unwrap();
        assert_eq!(rows[0].status, "pending");
    }

    #[actix_web::test]
    async fn update_completes_and_overwrites() {
        let pool = test_pool().await;
        let id = apply(&pool, "e0001", "online").await;

        update_tracking(&pool, &admin(), &tracking(id, "SF-123", "SF Express")).await.unwrap();
        update_tracking(&pool, &admin(), &tracking(id, "YT-9", "YTO")).await.unwrap();

        let rows = list_all(&pool, &admin()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee_id, "e0001");
        assert_eq!(rows[0].status, "completed");
        assert_eq!(rows[0].tracking_number.as_deref(), Some("YT-9"));
        assert_eq!(rows[0].courier_company.as_deref(), Some("YTO"));
    }
}
