use async_trait::async_trait;

use crate::model::{
    envelope::ApiResponse,
    id::{PolicyId, RoomId},
    policy::{CreatePolicy, RoomPolicy, UpdatePolicy},
};

#[async_trait]
pub trait PolicyRepository: Send + Sync {
    async fn list(&self, room_id: Option<RoomId>) -> ApiResponse<Vec<RoomPolicy>>;
    async fn create(&self, event: CreatePolicy) -> ApiResponse<PolicyId>;
    async fn update(&self, event: UpdatePolicy) -> ApiResponse<()>;
    async fn set_enabled(&self, policy_id: PolicyId, enabled: bool) -> ApiResponse<()>;
    async fn delete(&self, policy_id: PolicyId) -> ApiResponse<()>;
}
