use async_trait::async_trait;

use crate::model::{
    envelope::ApiResponse,
    id::{ClueId, LostAndFoundId},
    lost_found::{
        Clue, CreateClue, CreateLostAndFound, LostAndFoundInfo, LostAndFoundPreview,
        LostAndFoundQuery, LostAndFoundStatus,
    },
};

#[async_trait]
pub trait LostAndFoundRepository: Send + Sync {
    async fn list(&self, query: LostAndFoundQuery) -> ApiResponse<Vec<LostAndFoundInfo>>;
    // list, then resolve each attachment's preview URL one stagger step apart
    async fn list_with_previews(
        &self,
        query: LostAndFoundQuery,
    ) -> ApiResponse<Vec<LostAndFoundPreview>>;
    async fn find_by_id(&self, item_id: LostAndFoundId) -> ApiResponse<LostAndFoundInfo>;
    async fn create(&self, event: CreateLostAndFound) -> ApiResponse<LostAndFoundId>;
    async fn add_clue(&self, event: CreateClue) -> ApiResponse<ClueId>;
    async fn clues(&self, item_id: LostAndFoundId) -> ApiResponse<Vec<Clue>>;
    async fn update_status(
        &self,
        item_id: LostAndFoundId,
        status: LostAndFoundStatus,
    ) -> ApiResponse<()>;
}
