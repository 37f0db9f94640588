use chrono::{serde::ts_seconds, DateTime, Utc};
use kernel::model::storage::UploadCredentials;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRow {
    pub upload_url: String,
    pub authorization: String,
    pub security_token: String,
    #[serde(with = "ts_seconds")]
    pub expired_time: DateTime<Utc>,
}

impl From<CredentialsRow> for UploadCredentials {
    fn from(value: CredentialsRow) -> Self {
        let CredentialsRow {
            upload_url,
            authorization,
            security_token,
            expired_time,
        } = value;
        UploadCredentials {
            upload_url,
            authorization,
            security_token,
            expired_time,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PreviewRow {
    pub url: String,
}
