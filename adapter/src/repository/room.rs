use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    envelope::ApiResponse,
    id::{CampusId, RoomId},
    room::{
        event::{CreateRoom, UpdateRoom},
        Room,
    },
};
use kernel::repository::room::RoomRepository;

use crate::gateway::{
    model::{
        organization::{CreateRoomBody, RoomRow, UpdateRoomBody},
        CreatedRow, IdBody,
    },
    GatewayClient,
};

#[derive(new)]
pub struct RoomRepositoryImpl {
    gateway: GatewayClient,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn list(&self, campus_id: Option<CampusId>) -> ApiResponse<Vec<Room>> {
        let query: Vec<_> = campus_id
            .map(|id| ("campusId", id.to_string()))
            .into_iter()
            .collect();
        self.gateway
            .get::<Vec<RoomRow>>("/room/list", &query)
            .await
            .map(|rows| rows.into_iter().map(Room::from).collect())
    }

    async fn create(&self, event: CreateRoom) -> ApiResponse<RoomId> {
        self.gateway
            .post_json::<_, CreatedRow<RoomId>>("/room/create", &CreateRoomBody::from(event))
            .await
            .map(|row| row.id)
    }

    async fn update(&self, event: UpdateRoom) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/room/update", &UpdateRoomBody::from(event))
            .await
    }

    async fn delete(&self, room_id: RoomId) -> ApiResponse<()> {
        self.gateway
            .post_json_unit("/room/delete", &IdBody { id: room_id })
            .await
    }
}
