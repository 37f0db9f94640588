use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};
use uuid::Uuid;

/// Short-lived permission to write exactly one object, issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCredentials {
    pub upload_url: String,
    pub authorization: String,
    pub security_token: String,
    pub expired_time: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// `file/YYYYMMDD/YYYYMMDD_NNNNNN[.ext]`
pub fn upload_key(date: NaiveDate, suffix: u32, ext: Option<&str>) -> String {
    let day = date.format("%Y%m%d");
    let mut key = format!("file/{day}/{day}_{:06}", suffix % 1_000_000);
    if let Some(ext) = ext
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
    {
        key.push('.');
        key.push_str(&ext.to_ascii_lowercase());
    }
    key
}

pub fn generate_upload_key(file_name: &str) -> String {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str());
    let suffix = (Uuid::new_v4().as_u128() % 1_000_000) as u32;
    upload_key(Local::now().date_naive(), suffix, ext)
}
