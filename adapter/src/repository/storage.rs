use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    envelope::ApiResponse,
    storage::{generate_upload_key, UploadCredentials, UploadFile},
};
use kernel::repository::storage::StorageRepository;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::gateway::{
    model::storage::{CredentialsRow, PreviewRow},
    GatewayClient,
};

const SECURITY_TOKEN_HEADER: &str = "x-cos-security-token";

/// Object storage behind delegated credentials: the backend signs, the
/// client writes the bytes straight to the bucket.
#[derive(new)]
pub struct StorageRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl StorageRepository for StorageRepositoryImpl {
    async fn credentials(&self, key: &str) -> ApiResponse<UploadCredentials> {
        self.gateway
            .get::<CredentialsRow>("/storage/credentials", &[("key", key.to_string())])
            .await
            .map(UploadCredentials::from)
    }

    async fn preview_url(&self, key: &str) -> ApiResponse<String> {
        self.gateway
            .get::<PreviewRow>("/storage/preview", &[("key", key.to_string())])
            .await
            .map(|row| row.url)
    }

    async fn upload(&self, file: UploadFile) -> ApiResponse<String> {
        let key = generate_upload_key(&file.file_name);

        let granted = self.credentials(&key).await;
        let credentials = match granted.data {
            Some(c) if granted.success => c,
            _ => {
                return ApiResponse {
                    success: false,
                    data: None,
                    message: granted
                        .message
                        .or_else(|| Some("no upload credentials issued".into())),
                }
            }
        };
        if credentials.expired_time <= Utc::now() {
            tracing::warn!(
                key = %key,
                expired_time = %credentials.expired_time,
                "upload credentials already expired"
            );
            return ApiResponse::failure(format!(
                "upload credentials for {key} expired at {}",
                credentials.expired_time
            ));
        }

        let UploadFile {
            content_type,
            bytes,
            ..
        } = file;
        let size = bytes.len();
        let sent = self
            .gateway
            .inner_ref()
            .put(&credentials.upload_url)
            .header(AUTHORIZATION, credentials.authorization)
            .header(SECURITY_TOKEN_HEADER, credentials.security_token)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await;

        match sent {
            Ok(response) if response.status().is_success() => {
                tracing::info!(key = %key, size, "file uploaded");
                ApiResponse::ok(key)
            }
            Ok(response) => {
                let status = response.status();
                tracing::warn!(key = %key, %status, "object storage rejected upload");
                ApiResponse::failure(format!("upload of {key} failed: {status}"))
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "upload request failed");
                ApiResponse::failure(e.to_string())
            }
        }
    }
}
