use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::export::ExportRequest;
use kernel::repository::{export::ExportRepository, navigator::Navigator};
use reqwest::Url;
use shared::error::{AppError, AppResult};

use crate::gateway::GatewayClient;

/// Exports are plain downloads; the URL is built here and followed by the
/// navigator.
#[derive(new)]
pub struct ExportRepositoryImpl {
    gateway: GatewayClient,
    navigator: Arc<dyn Navigator>,
}

#[async_trait]
impl ExportRepository for ExportRepositoryImpl {
    fn export_url(&self, request: &ExportRequest) -> AppResult<String> {
        let base = self.gateway.url(request.kind.path());
        let url = Url::parse_with_params(&base, request.to_pairs())
            .map_err(|e| AppError::InvalidUrl(format!("{base}: {e}")))?;
        Ok(url.into())
    }

    async fn export(&self, request: ExportRequest) -> AppResult<()> {
        let url = self.export_url(&request)?;
        tracing::info!(kind = %request.kind, "starting export download");
        self.navigator.navigate(&url).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};
    use kernel::model::export::ExportKind;

    use super::*;
    use crate::gateway::testing::client_at;

    #[derive(Default)]
    struct SpyNavigator {
        visited: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Navigator for SpyNavigator {
        async fn navigate(&self, url: &str) -> AppResult<()> {
            self.visited.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn request(kind: ExportKind) -> ExportRequest {
        ExportRequest {
            kind,
            start: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap(),
            token: "t 1&2".into(),
        }
    }

    #[tokio::test]
    async fn export_navigates_to_signed_url() -> anyhow::Result<()> {
        let spy = Arc::new(SpyNavigator::default());
        let repo = ExportRepositoryImpl::new(client_at("http://gateway.test"), spy.clone());

        repo.export(request(ExportKind::LostAndFound)).await?;

        assert_eq!(
            spy.visited.lock().unwrap().as_slice(),
            ["http://gateway.test/lostandfound/export?start=1709251200&end=1711843200&token=t+1%262"]
        );
        Ok(())
    }

    #[test]
    fn each_kind_has_its_own_path() {
        let repo = ExportRepositoryImpl::new(
            client_at("http://gateway.test"),
            Arc::new(SpyNavigator::default()),
        );
        let url = repo.export_url(&request(ExportKind::Maintenance)).unwrap();
        assert!(url.starts_with("http://gateway.test/maintenance/export?"));
    }

    #[test]
    fn broken_base_is_an_invalid_url() {
        let repo = ExportRepositoryImpl::new(client_at("not a url"), Arc::new(SpyNavigator::default()));
        let err = repo.export_url(&request(ExportKind::Reservations)).unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }
}
