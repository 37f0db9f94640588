use std::path::PathBuf;

use async_trait::async_trait;
use kernel::repository::navigator::Navigator;
use reqwest::{header::CONTENT_DISPOSITION, Client, Url};
use shared::error::{AppError, AppResult};

/// Follows an export URL from a terminal by saving the response to disk.
pub struct DownloadNavigator {
    http: Client,
    dir: PathBuf,
}

impl DownloadNavigator {
    pub fn new(http: Client, dir: impl Into<PathBuf>) -> Self {
        Self {
            http,
            dir: dir.into(),
        }
    }
}

#[async_trait]
impl Navigator for DownloadNavigator {
    async fn navigate(&self, url: &str) -> AppResult<()> {
        let parsed = Url::parse(url).map_err(|e| AppError::InvalidUrl(format!("{url}: {e}")))?;
        let response = self.http.get(parsed.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "download from {} failed: {status}",
                parsed.path()
            )));
        }

        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(disposition_file_name)
            .or_else(|| last_segment(&parsed))
            .ok_or_else(|| AppError::InvalidUrl(format!("no file name in {url}")))?;

        let bytes = response.bytes().await?;
        let target = self.dir.join(&file_name);
        tokio::fs::write(&target, &bytes).await?;
        tracing::info!(path = %target.display(), size = bytes.len(), "export saved");
        Ok(())
    }
}

// `filename*` (RFC 6266 extended value) wins over plain `filename`
fn disposition_file_name(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;
    for part in header.split(';') {
        let Some((name, value)) = part.split_once('=') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        if name.eq_ignore_ascii_case("filename*") {
            extended = extended.or_else(|| decode_ext_value(value));
        } else if name.eq_ignore_ascii_case("filename") {
            plain = plain.or_else(|| Some(value.trim_matches('"').to_string()));
        }
    }
    extended.or(plain).as_deref().and_then(safe_file_name)
}

// charset'language'percent-encoded; only UTF-8 and ASCII-compatible charsets are read
fn decode_ext_value(value: &str) -> Option<String> {
    let mut parts = value.trim_matches('"').splitn(3, '\'');
    let charset = parts.next()?;
    let _language = parts.next()?;
    let encoded = parts.next()?;
    if !charset.eq_ignore_ascii_case("utf-8") && !charset.eq_ignore_ascii_case("iso-8859-1") {
        return None;
    }
    let decoded = percent_decode(encoded)?;
    if charset.eq_ignore_ascii_case("utf-8") {
        String::from_utf8(decoded).ok()
    } else {
        Some(decoded.into_iter().map(char::from).collect())
    }
}

fn percent_decode(input: &str) -> Option<Vec<u8>> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Some(out)
}

fn last_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .rev()
        .find(|s| !s.is_empty())
        .and_then(safe_file_name)
}

// keeps only the final path component so a header cannot write outside the dir
fn safe_file_name(name: &str) -> Option<String> {
    let name = name.rsplit(['/', '\\']).next()?.trim();
    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}
