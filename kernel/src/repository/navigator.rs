use async_trait::async_trait;
use shared::error::AppResult;

/// Whatever follows a download URL: a browser tab, a file writer, a test spy.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, url: &str) -> AppResult<()>;
}
