use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    envelope::ApiResponse,
    id::MaintenanceId,
    maintenance::{CreateMaintenance, MaintenanceInfo, MaintenanceStatus},
};
use kernel::repository::maintenance::MaintenanceRepository;
use reqwest::multipart::Form;

use crate::gateway::{
    model::{
        maintenance::{MaintenanceRow, MaintenanceStatusBody},
        CreatedRow,
    },
    GatewayClient,
};

#[derive(new)]
pub struct MaintenanceRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl MaintenanceRepository for MaintenanceRepositoryImpl {
    // the backend takes reports as multipart, not JSON
    async fn report(&self, event: CreateMaintenance) -> ApiResponse<MaintenanceId> {
        let CreateMaintenance {
            location,
            description,
            reporter,
            contact,
            file_key,
        } = event;
        let mut form = Form::new()
            .text("location", location)
            .text("description", description)
            .text("reporter", reporter)
            .text("contact", contact);
        if let Some(key) = file_key {
            form = form.text("fileKey", key);
        }
        self.gateway
            .post_form::<CreatedRow<MaintenanceId>>("/maintenance/create", form)
            .await
            .map(|row| row.id)
    }

    async fn list(&self, page: u32) -> ApiResponse<Vec<MaintenanceInfo>> {
        self.gateway
            .get::<Vec<MaintenanceRow>>("/maintenance/list", &[("page", page.to_string())])
            .await
            .map(|rows| rows.into_iter().map(MaintenanceInfo::from).collect())
    }

    async fn update_status(
        &self,
        maintenance_id: MaintenanceId,
        status: MaintenanceStatus,
    ) -> ApiResponse<()> {
        let body = MaintenanceStatusBody {
            id: maintenance_id,
            status,
        };
        self.gateway.post_json_unit("/maintenance/status", &body).await
    }
}
