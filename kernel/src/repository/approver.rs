use async_trait::async_trait;

use crate::model::{
    envelope::ApiResponse,
    reservation::{event::ApproverAction, Reservation},
};

#[async_trait]
pub trait ApproverRepository: Send + Sync {
    // reservation behind an emailed approval token
    async fn info(&self, token: &str) -> ApiResponse<Reservation>;
    async fn act(&self, action: ApproverAction) -> ApiResponse<()>;
}
