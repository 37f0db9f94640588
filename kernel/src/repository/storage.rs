use async_trait::async_trait;

use crate::model::{
    envelope::ApiResponse,
    storage::{UploadCredentials, UploadFile},
};

#[async_trait]
pub trait StorageRepository: Send + Sync {
    // delegated credentials scoped to one object key
    async fn credentials(&self, key: &str) -> ApiResponse<UploadCredentials>;
    async fn preview_url(&self, key: &str) -> ApiResponse<String>;
    // returns the object key the file was stored under
    async fn upload(&self, file: UploadFile) -> ApiResponse<String>;
}
