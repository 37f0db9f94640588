use std::{env, path::PathBuf, time::Duration};

use anyhow::{Context, Result};

const DEFAULT_QUOTE_API_URL: &str = "https://v1.hitokoto.cn/";
const DEFAULT_PREVIEW_STAGGER_MS: u64 = 200;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub quote: QuoteConfig,
    pub storage: StorageConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("API_BASE_URL")
            .context("API_BASE_URL must be set")?
            .trim_end_matches('/')
            .to_string();
        let legacy_base_url = lookup("LEGACY_API_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("{base_url}/api"));
        let with_credentials = match lookup("API_WITH_CREDENTIALS") {
            Some(v) => v
                .parse::<bool>()
                .with_context(|| format!("API_WITH_CREDENTIALS is not a bool: {v}"))?,
            None => true,
        };
        let preview_stagger_ms = match lookup("PREVIEW_STAGGER_MS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("PREVIEW_STAGGER_MS is not a number: {v}"))?,
            None => DEFAULT_PREVIEW_STAGGER_MS,
        };

        Ok(Self {
            gateway: GatewayConfig {
                base_url,
                legacy_base_url,
                with_credentials,
            },
            quote: QuoteConfig {
                url: lookup("QUOTE_API_URL").unwrap_or_else(|| DEFAULT_QUOTE_API_URL.into()),
            },
            storage: StorageConfig {
                preview_stagger: Duration::from_millis(preview_stagger_ms),
            },
            export: ExportConfig {
                download_dir: lookup("EXPORT_DOWNLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(".")),
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub legacy_base_url: String,
    pub with_credentials: bool,
}

#[derive(Debug, Clone)]
pub struct QuoteConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub preview_stagger: Duration,
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub download_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn config_defaults_are_derived_from_base_url() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("API_BASE_URL", "https://rsv.example.edu/")]))
                .unwrap();

        assert_eq!(config.gateway.base_url, "https://rsv.example.edu");
        assert_eq!(config.gateway.legacy_base_url, "https://rsv.example.edu/api");
        assert!(config.gateway.with_credentials);
        assert_eq!(config.quote.url, DEFAULT_QUOTE_API_URL);
        assert_eq!(config.storage.preview_stagger, Duration::from_millis(200));
        assert_eq!(config.export.download_dir, PathBuf::from("."));
    }

    #[test]
    fn config_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_BASE_URL", "http://localhost:8000"),
            ("LEGACY_API_BASE_URL", "http://legacy.local/php/"),
            ("API_WITH_CREDENTIALS", "false"),
            ("PREVIEW_STAGGER_MS", "50"),
            ("EXPORT_DOWNLOAD_DIR", "/tmp/exports"),
        ]))
        .unwrap();

        assert_eq!(config.gateway.legacy_base_url, "http://legacy.local/php");
        assert!(!config.gateway.with_credentials);
        assert_eq!(config.storage.preview_stagger, Duration::from_millis(50));
        assert_eq!(config.export.download_dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn config_requires_base_url() {
        assert!(AppConfig::from_lookup(lookup_from(&[])).is_err());
    }

    #[test]
    fn config_rejects_malformed_flags() {
        let res = AppConfig::from_lookup(lookup_from(&[
            ("API_BASE_URL", "http://localhost:8000"),
            ("API_WITH_CREDENTIALS", "sometimes"),
        ]));
        assert!(res.is_err());
    }
}
