use kernel::model::{
    admin::{Admin, AdminRole, CreateAdmin},
    id::{AdminId, CampusId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRow {
    pub id: AdminId,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub campus_id: Option<CampusId>,
    pub role: AdminRole,
}

impl From<AdminRow> for Admin {
    fn from(value: AdminRow) -> Self {
        let AdminRow {
            id,
            username,
            name,
            email,
            campus_id,
            role,
        } = value;
        Admin {
            id,
            username,
            name,
            email,
            campus_id,
            role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminBody {
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_id: Option<CampusId>,
    pub role: AdminRole,
}

impl From<CreateAdmin> for CreateAdminBody {
    fn from(value: CreateAdmin) -> Self {
        let CreateAdmin {
            username,
            password,
            name,
            email,
            campus_id,
            role,
        } = value;
        Self {
            username,
            password,
            name,
            email,
            campus_id,
            role,
        }
    }
}
