use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::export::ExportRequest;

#[async_trait]
pub trait ExportRepository: Send + Sync {
    fn export_url(&self, request: &ExportRequest) -> AppResult<String>;
    // hands the URL to the navigator; nothing is returned to the caller
    async fn export(&self, request: ExportRequest) -> AppResult<()>;
}
