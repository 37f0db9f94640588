use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    class::{Class, CreateClass},
    envelope::ApiResponse,
    id::{CampusId, ClassId},
};
use kernel::repository::class::ClassRepository;

use crate::gateway::{
    model::{
        organization::{ClassRow, CreateClassBody},
        CreatedRow, IdBody,
    },
    GatewayClient,
};

#[derive(new)]
pub struct ClassRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl ClassRepository for ClassRepositoryImpl {
    async fn list(&self, campus_id: Option<CampusId>) -> ApiResponse<Vec<Class>> {
        let query: Vec<_> = campus_id
            .map(|id| ("campusId", id.to_string()))
            .into_iter()
            .collect();
        self.gateway
            .get::<Vec<ClassRow>>("/class/list", &query)
            .await
            .map(|rows| rows.into_iter().map(Class::from).collect())
    }

    async fn create(&self, event: CreateClass) -> ApiResponse<ClassId> {
        self.gateway
            .post_json::<_, CreatedRow<ClassId>>("/class/create", &CreateClassBody::from(event))
            .await
            .map(|row| row.id)
    }

    async fn delete(&self, class_id: ClassId) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/class/delete", &IdBody { id: class_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::gateway::testing::client_for;

    #[tokio::test]
    async fn create_then_delete() -> anyhow::Result<()> {
        let router = Router::new()
            .route(
                "/class/create",
                post(|Json(body): Json<Value>| async move {
                    assert_eq!(body, json!({"name": "Physics 2B", "campusId": 1}));
                    Json(json!({"success": true, "data": {"id": 14}}))
                }),
            )
            .route(
                "/class/delete",
                post(|| async { Json(json!({"success": false, "message": "class has rooms"})) }),
            );
        let repo = ClassRepositoryImpl::new(client_for(router).await);

        let id = repo
            .create(CreateClass::new("Physics 2B".into(), CampusId::new(1)))
            .await
            .data
            .unwrap();
        assert_eq!(id, ClassId::new(14));

        let res = repo.delete(id).await;
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("class has rooms"));
        Ok(())
    }
}
