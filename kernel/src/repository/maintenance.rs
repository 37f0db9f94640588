use async_trait::async_trait;

use crate::model::{
    envelope::ApiResponse,
    id::MaintenanceId,
    maintenance::{CreateMaintenance, MaintenanceInfo, MaintenanceStatus},
};

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn report(&self, event: CreateMaintenance) -> ApiResponse<MaintenanceId>;
    async fn list(&self, page: u32) -> ApiResponse<Vec<MaintenanceInfo>>;
    async fn update_status(
        &self,
        maintenance_id: MaintenanceId,
        status: MaintenanceStatus,
    ) -> ApiResponse<()>;
}
