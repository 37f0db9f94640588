use async_trait::async_trait;

use crate::model::{
    campus::{Campus, UpdateCampus},
    envelope::ApiResponse,
    id::CampusId,
};

#[async_trait]
pub trait CampusRepository: Send + Sync {
    async fn list(&self) -> ApiResponse<Vec<Campus>>;
    async fn create(&self, name: &str) -> ApiResponse<CampusId>;
    async fn update(&self, event: UpdateCampus) -> ApiResponse<()>;
    async fn delete(&self, campus_id: CampusId) -> ApiResponse<()>;
}
