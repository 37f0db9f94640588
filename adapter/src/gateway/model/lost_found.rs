use chrono::{serde::ts_seconds_option, DateTime, Utc};
use kernel::model::{
    id::{ClueId, LostAndFoundId},
    lost_found::{Clue, LostAndFoundInfo, LostAndFoundKind, LostAndFoundStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostAndFoundRow {
    pub id: LostAndFoundId,
    #[serde(rename = "type")]
    pub kind: LostAndFoundKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub file_key: Option<String>,
    pub status: LostAndFoundStatus,
    #[serde(default, with = "ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<LostAndFoundRow> for LostAndFoundInfo {
    fn from(value: LostAndFoundRow) -> Self {
        let LostAndFoundRow {
            id,
            kind,
            title,
            description,
            location,
            contact,
            file_key,
            status,
            created_at,
        } = value;
        LostAndFoundInfo {
            id,
            kind,
            title,
            description,
            location,
            contact,
            file_key,
            status,
            created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueRow {
    pub id: ClueId,
    pub item_id: LostAndFoundId,
    pub description: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub file_key: Option<String>,
    #[serde(default, with = "ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ClueRow> for Clue {
    fn from(value: ClueRow) -> Self {
        let ClueRow {
            id,
            item_id,
            description,
            contact,
            file_key,
            created_at,
        } = value;
        Clue {
            id,
            item_id,
            description,
            contact,
            file_key,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LostAndFoundStatusBody {
    pub id: LostAndFoundId,
    pub status: LostAndFoundStatus,
}
