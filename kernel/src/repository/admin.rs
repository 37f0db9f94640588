use async_trait::async_trait;

use crate::model::{
    admin::{Admin, CreateAdmin},
    envelope::ApiResponse,
    id::AdminId,
};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    // starts a cookie session on the shared client
    async fn login(&self, username: &str, password: &str) -> ApiResponse<Admin>;
    async fn logout(&self) -> ApiResponse<()>;
    async fn current(&self) -> ApiResponse<Admin>;
    async fn list(&self) -> ApiResponse<Vec<Admin>>;
    async fn create(&self, event: CreateAdmin) -> ApiResponse<AdminId>;
    async fn delete(&self, admin_id: AdminId) -> ApiResponse<()>;
}
