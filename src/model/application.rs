use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Longest accepted delivery address, in characters.
pub const MAX_ADDRESS_LEN: usize = 100;

/// Serialises timestamps the way SQLite's `CURRENT_TIMESTAMP` stores them,
/// `YYYY-MM-DD HH:MM:SS`.
pub mod sqlite_datetime {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, AsRefStr, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BoxType {
    Regular,
    Halal,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, AsRefStr, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeliveryType {
    Offline,
    Online,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, AsRefStr, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Completed,
}

/// Row of the `applications` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Application {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "e0001")]
    pub employee_id: String,
    #[schema(example = "halal")]
    pub box_type: String,
    #[schema(example = "online")]
    pub delivery_type: String,
    #[schema(example = "pending")]
    pub status: String,
    #[schema(example = "12 Elm St")]
    pub address: Option<String>,
    #[schema(example = "SF-123")]
    pub tracking_number: Option<String>,
    #[schema(example = "SF Express")]
    pub courier_company: Option<String>,
    #[serde(serialize_with = "sqlite_datetime::serialize")]
    #[schema(example = "2026-09-01 08:00:00", value_type = String)]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "sqlite_datetime::serialize")]
    #[schema(example = "2026-09-01 08:00:00", value_type = String)]
    pub updated_at: NaiveDateTime,
}

/// A validated submission, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub box_type: BoxType,
    pub delivery_type: DeliveryType,
    /// Only ever `Some` for online delivery.
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamps_serialise_in_sqlite_text_form() {
        let at = NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let application = Application {
            id: 1,
            employee_id: "e0001".to_string(),
            box_type: "halal".to_string(),
            delivery_type: "online".to_string(),
            status: "pending".to_string(),
            address: Some("12 Elm St".to_string()),
            tracking_number: None,
            courier_company: None,
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_value(&application).unwrap();
        assert_eq!(json["created_at"], "2026-09-01 08:00:00");
        assert_eq!(json["updated_at"], "2026-09-01 08:00:00");
    }
}
