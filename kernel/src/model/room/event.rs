use derive_new::new;

use crate::model::id::{CampusId, RoomId};

#[derive(new, Debug, Clone)]
pub struct CreateRoom {
    pub name: String,
    pub campus_id: CampusId,
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub name: Option<String>,
    pub campus_id: Option<CampusId>,
    pub capacity: Option<i32>,
}
