use async_trait::async_trait;

use crate::model::{
    class::{Class, CreateClass},
    envelope::ApiResponse,
    id::{CampusId, ClassId},
};

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn list(&self, campus_id: Option<CampusId>) -> ApiResponse<Vec<Class>>;
    async fn create(&self, event: CreateClass) -> ApiResponse<ClassId>;
    async fn delete(&self, class_id: ClassId) -> ApiResponse<()>;
}
