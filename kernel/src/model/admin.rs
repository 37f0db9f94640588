use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::model::id::{AdminId, CampusId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AdminRole {
    Super,
    Campus,
    Approver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: AdminId,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub campus_id: Option<CampusId>,
    pub role: AdminRole,
}

#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: Option<String>,
    pub campus_id: Option<CampusId>,
    pub role: AdminRole,
}
