use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::model::id::{ClueId, LostAndFoundId};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LostAndFoundKind {
    Lost,
    Found,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LostAndFoundStatus {
    Open,
    Claimed,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LostAndFoundInfo {
    pub id: LostAndFoundId,
    pub kind: LostAndFoundKind,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub file_key: Option<String>,
    pub status: LostAndFoundStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// A record together with the resolved preview URL of its attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct LostAndFoundPreview {
    pub item: LostAndFoundInfo,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clue {
    pub id: ClueId,
    pub item_id: LostAndFoundId,
    pub description: String,
    pub contact: String,
    pub file_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct LostAndFoundQuery {
    pub page: u32,
    pub query: String,
    pub token: String,
    pub clue: bool,
}

impl LostAndFoundQuery {
    /// Query-string pairs; blank search text, blank token and `clue == false`
    /// are left out entirely.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if !self.query.is_empty() {
            pairs.push(("query", self.query.clone()));
        }
        if !self.token.is_empty() {
            pairs.push(("token", self.token.clone()));
        }
        if self.clue {
            pairs.push(("clue", "true".to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct CreateLostAndFound {
    pub kind: LostAndFoundKind,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub file_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateClue {
    pub item_id: LostAndFoundId,
    pub description: String,
    pub contact: String,
    pub file_key: Option<String>,
}
