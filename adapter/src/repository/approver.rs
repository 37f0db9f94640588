use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    envelope::ApiResponse,
    reservation::{event::ApproverAction, Reservation},
};
use kernel::repository::approver::ApproverRepository;

use crate::gateway::{
    model::reservation::{ApproverActionBody, ReservationRow},
    GatewayClient,
};

#[derive(new)]
pub struct ApproverRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl ApproverRepository for ApproverRepositoryImpl {
    async fn info(&self, token: &str) -> ApiResponse<Reservation> {
        self.gateway
            .get::<ReservationRow>("/approver/info", &[("token", token.to_string())])
            .await
            .map(Reservation::from)
    }

    async fn act(&self, action: ApproverAction) -> ApiResponse<()> {
        let body = ApproverActionBody::from(action);
        self.gateway.post_json_unit("/approver/action", &body).await
    }
}
