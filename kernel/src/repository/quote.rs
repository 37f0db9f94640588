use async_trait::async_trait;

use crate::model::{envelope::ApiResponse, quote::Quote};

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn today(&self) -> ApiResponse<Quote>;
}
