use chrono::{DateTime, Utc};
use strum::{Display, EnumString, VariantNames};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum ExportKind {
    Reservations,
    Maintenance,
    LostAndFound,
}

impl ExportKind {
    pub fn path(self) -> &'static str {
        match self {
            ExportKind::Reservations => "/reservation/export",
            ExportKind::Maintenance => "/maintenance/export",
            ExportKind::LostAndFound => "/lostandfound/export",
        }
    }
}

/// A download that is started by navigating to a URL, not by a REST call.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub kind: ExportKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub token: String,
}

impl ExportRequest {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.start.timestamp().to_string()),
            ("end", self.end.timestamp().to_string()),
            ("token", self.token.clone()),
        ]
    }
}
