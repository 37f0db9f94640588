use async_trait::async_trait;

use crate::model::{
    envelope::ApiResponse,
    id::{CampusId, RoomId},
    room::{
        event::{CreateRoom, UpdateRoom},
        Room,
    },
};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    // all rooms, or only the rooms of one campus
    async fn list(&self, campus_id: Option<CampusId>) -> ApiResponse<Vec<Room>>;
    async fn create(&self, event: CreateRoom) -> ApiResponse<RoomId>;
    async fn update(&self, event: UpdateRoom) -> ApiResponse<()>;
    async fn delete(&self, room_id: RoomId) -> ApiResponse<()>;
}
