use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    campus::{Campus, UpdateCampus},
    envelope::ApiResponse,
    id::CampusId,
};
use kernel::repository::campus::CampusRepository;

use crate::gateway::{
    model::{
        organization::{CampusRow, CreateCampusBody, UpdateCampusBody},
        CreatedRow, IdBody,
    },
    GatewayClient,
};

#[derive(new)]
pub struct CampusRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl CampusRepository for CampusRepositoryImpl {
    async fn list(&self) -> ApiResponse<Vec<Campus>> {
        self.gateway
            .get::<Vec<CampusRow>>("/campus/list", &[])
            .await
            .map(|rows| rows.into_iter().map(Campus::from).collect())
    }

    async fn create(&self, name: &str) -> ApiResponse<CampusId> {
        self.gateway
            .post_json::<_, CreatedRow<CampusId>>("/campus/create", &CreateCampusBody { name })
            .await
            .map(|row| row.id)
    }

    async fn update(&self, event: UpdateCampus) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/campus/update", &UpdateCampusBody::from(event))
            .await
    }

    async fn delete(&self, campus_id: CampusId) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/campus/delete", &IdBody { id: campus_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::gateway::testing::client_for;

    #[tokio::test]
    async fn list_create_update() -> anyhow::Result<()> {
        let router = Router::new()
            .route(
                "/campus/list",
                get(|| async {
                    Json(json!({"success": true, "data": [
                        {"id": 1, "name": "North"},
                        {"id": 2, "name": "South"}
                    ]}))
                }),
            )
            .route(
                "/campus/create",
                post(|Json(body): Json<Value>| async move {
                    assert_eq!(body, json!({"name": "East"}));
                    Json(json!({"success": true, "data": {"id": 3}}))
                }),
            )
            .route(
                "/campus/update",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({"success": body == json!({"id": 2, "name": "South Bay"})}))
                }),
            );
        let repo = CampusRepositoryImpl::new(client_for(router).await);

        let campuses = repo.list().await.data.unwrap();
        assert_eq!(campuses.len(), 2);
        assert_eq!(campuses[1].name, "South");

        assert_eq!(repo.create("East").await.data, Some(CampusId::new(3)));
        assert!(
            repo.update(UpdateCampus::new(CampusId::new(2), "South Bay".into()))
                .await
                .success
        );
        Ok(())
    }
}
