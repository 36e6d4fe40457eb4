use crate::{
    auth::auth::AuthUser,
    error::ApiError,
    model::application::{
        Application, BoxType, DeliveryType, MAX_ADDRESS_LEN, NewApplication, sqlite_datetime,
    },
    repository::application::{create_if_absent, find_by_owner},
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubmitApplication {
    #[schema(example = "halal")]
    pub box_type: Option<String>,
    #[schema(example = "online")]
    pub delivery_type: Option<String>,
    #[schema(example = "12 Elm St")]
    pub address: Option<String>,
}

/// What an employee sees about their own application.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct StatusView {
    #[schema(example = "pending")]
    pub status: String,
    #[schema(example = "halal")]
    pub box_type: String,
    #[schema(example = "online")]
    pub delivery_type: String,
    pub address: Option<String>,
    pub tracking_number: Option<String>,
    pub courier_company: Option<String>,
    #[serde(serialize_with = "sqlite_datetime::serialize")]
    #[schema(example = "2026-09-01 08:00:00", value_type = String)]
    pub created_at: chrono::NaiveDateTime,
}

impl From<Application> for StatusView {
    fn from(a: Application) -> Self {
        StatusView {
            status: a.status,
            box_type: a.box_type,
            delivery_type: a.delivery_type,
            address: a.address,
            tracking_number: a.tracking_number,
            courier_company: a.courier_company,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ApplicationState {
    NotApplied,
    Applied(StatusView),
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub fn validate_submission(req: &SubmitApplication) -> Result<NewApplication, ApiError> {
    let (box_type, delivery_type) = match (non_empty(&req.box_type), non_empty(&req.delivery_type)) {
        (Some(b), Some(d)) => (b, d),
        _ => return Err(ApiError::MissingFields),
    };

    let box_type = BoxType::from_str(box_type).map_err(|_| ApiError::InvalidBoxType)?;
    let delivery_type =
        DeliveryType::from_str(delivery_type).map_err(|_| ApiError::InvalidDeliveryType)?;

    let address = match delivery_type {
        DeliveryType::Offline => None,
        DeliveryType::Online => {
            let address = non_empty(&req.address).ok_or(ApiError::AddressRequired)?;
            if address.chars().count() > MAX_ADDRESS_LEN {
                return Err(ApiError::AddressTooLong);
            }
            Some(address.to_string())
        }
    };

    Ok(NewApplication {
        box_type,
        delivery_type,
        address,
    })
}

/// Creates the caller's one and only application.
pub async fn submit(
    pool: &SqlitePool,
    user: &AuthUser,
    req: &SubmitApplication,
) -> Result<i64, ApiError> {
    let new = validate_submission(req).inspect_err(|e| info!(error = %e, "Submission rejected"))?;

    match create_if_absent(pool, &user.employee_id, &new).await? {
        Some(id) => {
            info!(application_id = id, "Application submitted");
            Ok(id)
        }
        None => {
            info!("Submission rejected: already applied");
            Err(ApiError::AlreadyApplied)
        }
    }
}

pub async fn status(pool: &SqlitePool, user: &AuthUser) -> Result<ApplicationState, ApiError> {
    Ok(match find_by_owner(pool, &user.employee_id).await? {
        Some(application) => ApplicationState::Applied(application.into()),
        None => ApplicationState::NotApplied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{add_test_user, test_pool};
    use crate::model::role::Role;

    fn req(box_type: &str, delivery_type: &str, address: Option<&str>) -> SubmitApplication {
        SubmitApplication {
            box_type: Some(box_type.to_string()),
            delivery_type: Some(delivery_type.to_string()),
            address: address.map(str::to_string),
        }
    }

    fn employee(id: &str) -> AuthUser {
        AuthUser {
            employee_id: id.to_string(),
            role: Role::Employee,
        }
    }

    #[test]
    fn rejects_unknown_enums() {
        assert_eq!(validate_submission(&req("vegan", "offline", None)), Err(ApiError::InvalidBoxType));
        assert_eq!(validate_submission(&req("regular", "drone", None)), Err(ApiError::InvalidDeliveryType));
        assert_eq!(validate_submission(&SubmitApplication::default()), Err(ApiError::MissingFields));
    }

    #[test]
    fn online_address_rules() {
        assert_eq!(validate_submission(&req("halal", "online", None)), Err(ApiError::AddressRequired));
        assert_eq!(validate_submission(&req("halal", "online", Some(""))), Err(ApiError::AddressRequired));

        let too_long = "a".repeat(101);
        assert_eq!(
            validate_submission(&req("halal", "online", Some(&too_long))),
            Err(ApiError::AddressTooLong)
        );

        let exact = "a".repeat(100);
        let ok = validate_submission(&req("halal", "online", Some(&exact))).unwrap();
        assert_eq!(ok.address.as_deref(), Some(exact.as_str()));

        // length is counted in characters, not bytes
        let wide = "街".repeat(100);
        assert!(validate_submission(&req("halal", "online", Some(&wide))).is_ok());
    }

    #[test]
    fn offline_drops_address() {
        let ok = validate_submission(&req("regular", "offline", Some("ignored"))).unwrap();
        assert_eq!(ok.delivery_type, DeliveryType::Offline);
        assert_eq!(ok.address, None);
    }

    #[actix_web::test]
    async fn submit_then_status_round_trip() {
        let pool = test_pool().await;
        add_test_user(&pool, "e0001", "password1", Role::Employee).await;
        let user = employee("e0001");

        assert_eq!(status(&pool, &user).await.unwrap(), ApplicationState::NotApplied);

        submit(&pool, &user, &req("regular", "offline", None)).await.unwrap();

        let ApplicationState::Applied(view) = status(&pool, &user).await.unwrap() else {
            panic!("expected an application");
        };
        assert_eq!(view.status, "pending");
        assert_eq!(view.box_type, "regular");
        assert_eq!(view.delivery_type, "offline");
        assert_eq!(view.address, None);
    }

    #[actix_web::test]
    async fn second_submission_conflicts_and_keeps_first() {
        let pool = test_pool().await;
        add_test_user(&pool, "e0002", "password2", Role::Employee).await;
        let user = employee("e0002");

        submit(&pool, &user, &req("halal", "online", Some("12 Elm St"))).await.unwrap();
        let again = submit(&pool, &user, &req("regular", "offline", None)).await;
        assert_eq!(again, Err(ApiError::AlreadyApplied));

        let ApplicationState::Applied(view) = status(&pool, &user).await.unwrap() else {
            panic!("expected an application");
        };
        assert_eq!(view.box_type, "halal");
        assert_eq!(view.address.as_deref(), Some("12 Elm St"));
    }

    #[actix_web::test]
    async fn concurrent_submissions_insert_exactly_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let pool = crate::db::test_file_pool(&dir.path().join("gift-box.sqlite3"), 5).await;
        add_test_user(&pool, "e0005", "password5", Role::Employee).await;
        let user = employee("e0005");

        let payloads: Vec<SubmitApplication> = (0..8)
            .map(|i| {
                if i % 2 == 0 {
                    req("regular", "offline", None)
                } else {
                    req("halal", "online", Some("12 Elm St"))
                }
            })
            .collect();

        let results = futures::future::join_all(
            payloads.iter().map(|payload| submit(&pool, &user, payload)),
        )
        .await;

        let accepted = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| **r == Err(ApiError::AlreadyApplied))
            .count();
        assert_eq!(accepted, 1);
        assert_eq!(conflicts, 7);

        let rows: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE employee_id = ?")
                .bind("e0005")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(rows, 1);
    }
}
