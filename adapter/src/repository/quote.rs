use async_trait::async_trait;
use derive_new::new;
use kernel::model::{envelope::ApiResponse, quote::Quote};
use kernel::repository::quote::QuoteRepository;

use crate::gateway::{model::quote::HitokotoRow, GatewayClient};

#[derive(new)]
pub struct QuoteRepositoryImpl {
    gateway: GatewayClient,
    url: String,
}

#[async_trait]
impl QuoteRepository for QuoteRepositoryImpl {
    async fn today(&self) -> ApiResponse<Quote> {
        self.gateway
            .fetch_plain::<HitokotoRow>(&self.url)
            .await
            .map(Quote::from)
    }
}
