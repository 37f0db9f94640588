use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::model::id::MaintenanceId;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MaintenanceStatus {
    Pending,
    Processing,
    Resolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceInfo {
    pub id: MaintenanceId,
    pub location: String,
    pub description: String,
    pub reporter: String,
    pub contact: String,
    pub file_key: Option<String>,
    pub status: MaintenanceStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct CreateMaintenance {
    pub location: String,
    pub description: String,
    pub reporter: String,
    pub contact: String,
    pub file_key: Option<String>,
}
