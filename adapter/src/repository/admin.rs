use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    admin::{Admin, CreateAdmin},
    envelope::ApiResponse,
    id::AdminId,
};
use kernel::repository::admin::AdminRepository;
use serde_json::json;

use crate::gateway::{
    model::{
        admin::{AdminRow, CreateAdminBody, LoginBody},
        CreatedRow, IdBody,
    },
    GatewayClient,
};

/// The session lives in the gateway's cookie jar, so every repository built
/// from the same client is authenticated after `login`.
#[derive(new)]
pub struct AdminRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl AdminRepository for AdminRepositoryImpl {
    async fn login(&self, username: &str, password: &str) -> ApiResponse<Admin> {
        let res = self
            .gateway
            .post_json::<_, AdminRow>("/admin/login", &LoginBody { username, password })
            .await
            .map(Admin::from);
        if res.success {
            tracing::info!(username, "admin logged in");
        }
        res
    }

    async fn logout(&self) -> ApiResponse<()> {
        self.gateway.post_json_unit("/admin/logout", &json!({})).await
    }

    async fn current(&self) -> ApiResponse<Admin> {
        self.gateway
            .get::<AdminRow>("/admin/me", &[])
            .await
            .map(Admin::from)
    }

    async fn list(&self) -> ApiResponse<Vec<Admin>> {
        self.gateway
            .get::<Vec<AdminRow>>("/admin/list", &[])
            .await
            .map(|rows| rows.into_iter().map(Admin::from).collect())
    }

    async fn create(&self, event: CreateAdmin) -> ApiResponse<AdminId> {
        self.gateway
            .post_json::<_, CreatedRow<AdminId>>("/admin/create", &CreateAdminBody::from(event))
            .await
            .map(|row| row.id)
    }

    async fn delete(&self, admin_id: AdminId) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/admin/delete", &IdBody { id: admin_id })
            .await
    }
}
