use chrono::{serde::ts_seconds_option, DateTime, Utc};
use kernel::model::{
    id::MaintenanceId,
    maintenance::{MaintenanceInfo, MaintenanceStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRow {
    pub id: MaintenanceId,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub reporter: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub file_key: Option<String>,
    pub status: MaintenanceStatus,
    #[serde(default, with = "ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<MaintenanceRow> for MaintenanceInfo {
    fn from(value: MaintenanceRow) -> Self {
        let MaintenanceRow {
            id,
            location,
            description,
            reporter,
            contact,
            file_key,
            status,
            created_at,
        } = value;
        MaintenanceInfo {
            id,
            location,
            description,
            reporter,
            contact,
            file_key,
            status,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MaintenanceStatusBody {
    pub id: MaintenanceId,
    pub status: MaintenanceStatus,
}
