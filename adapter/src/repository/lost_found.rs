use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use derive_new::new;
use futures::future::join_all;
use kernel::model::{
    envelope::ApiResponse,
    id::{ClueId, LostAndFoundId},
    lost_found::{
        Clue, CreateClue, CreateLostAndFound, LostAndFoundInfo, LostAndFoundPreview,
        LostAndFoundQuery, LostAndFoundStatus,
    },
};
use kernel::repository::{lost_found::LostAndFoundRepository, storage::StorageRepository};
use reqwest::multipart::Form;

use crate::gateway::{
    model::{
        lost_found::{ClueRow, LostAndFoundRow, LostAndFoundStatusBody},
        CreatedRow,
    },
    GatewayClient,
};

#[derive(new)]
pub struct LostAndFoundRepositoryImpl {
    gateway: GatewayClient,
    storage: Arc<dyn StorageRepository>,
    preview_stagger: Duration,
}

#[async_trait]
impl LostAndFoundRepository for LostAndFoundRepositoryImpl {
    async fn list(&self, query: LostAndFoundQuery) -> ApiResponse<Vec<LostAndFoundInfo>> {
        self.gateway
            .get::<Vec<LostAndFoundRow>>("/lostandfound/list", &query.to_pairs())
            .await
            .map(|rows| rows.into_iter().map(LostAndFoundInfo::from).collect())
    }

    async fn list_with_previews(
        &self,
        query: LostAndFoundQuery,
    ) -> ApiResponse<Vec<LostAndFoundPreview>> {
        let listed = self.list(query).await;
        let ApiResponse {
            success,
            data,
            message,
        } = listed;
        let Some(items) = data.filter(|_| success) else {
            return ApiResponse {
                success,
                data: None,
                message,
            };
        };

        // item i waits i steps so the preview endpoint is not hit all at once
        let lookups = items.into_iter().enumerate().map(|(i, item)| async move {
            let Some(key) = item.file_key.clone() else {
                return LostAndFoundPreview {
                    item,
                    preview_url: None,
                };
            };
            tokio::time::sleep(stagger_delay(self.preview_stagger, i)).await;
            let resolved = self.storage.preview_url(&key).await;
            if !resolved.success {
                tracing::warn!(key = %key, message = ?resolved.message, "preview lookup failed");
            }
            LostAndFoundPreview {
                item,
                preview_url: resolved.data.filter(|_| resolved.success),
            }
        });

        ApiResponse {
            success: true,
            data: Some(join_all(lookups).await),
            message,
        }
    }

    async fn find_by_id(&self, item_id: LostAndFoundId) -> ApiResponse<LostAndFoundInfo> {
        self.gateway
            .get::<LostAndFoundRow>("/lostandfound/get", &[("id", item_id.to_string())])
            .await
            .map(LostAndFoundInfo::from)
    }

    async fn create(&self, event: CreateLostAndFound) -> ApiResponse<LostAndFoundId> {
        let CreateLostAndFound {
            kind,
            title,
            description,
            location,
            contact,
            file_key,
        } = event;
        let mut form = Form::new()
            .text("type", kind.to_string())
            .text("title", title)
            .text("description", description)
            .text("location", location)
            .text("contact", contact);
        if let Some(key) = file_key {
            form = form.text("fileKey", key);
        }
        self.gateway
            .post_form::<CreatedRow<LostAndFoundId>>("/lostandfound/create", form)
            .await
            .map(|row| row.id)
    }

    async fn add_clue(&self, event: CreateClue) -> ApiResponse<ClueId> {
        let CreateClue {
            item_id,
            description,
            contact,
            file_key,
        } = event;
        let mut form = Form::new()
            .text("itemId", item_id.to_string())
            .text("description", description)
            .text("contact", contact);
        if let Some(key) = file_key {
            form = form.text("fileKey", key);
        }
        self.gateway
            .post_form::<CreatedRow<ClueId>>("/lostandfound/clue/create", form)
            .await
            .map(|row| row.id)
    }

    async fn clues(&self, item_id: LostAndFoundId) -> ApiResponse<Vec<Clue>> {
        self.gateway
            .get::<Vec<ClueRow>>("/lostandfound/clue/list", &[("itemId", item_id.to_string())])
            .await
            .map(|rows| rows.into_iter().map(Clue::from).collect())
    }

    async fn update_status(
        &self,
        item_id: LostAndFoundId,
        status: LostAndFoundStatus,
    ) -> ApiResponse<()> {
        let body = LostAndFoundStatusBody {
            id: item_id,
            status,
        };
        self.gateway.post_json_unit("/lostandfound/status", &body).await
    }
}

fn stagger_delay(step: Duration, index: usize) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}
